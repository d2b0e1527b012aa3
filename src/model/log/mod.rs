pub mod comparison;
pub mod system;
