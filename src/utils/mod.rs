pub mod assets;
pub mod font;
pub mod logging;
