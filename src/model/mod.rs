pub mod comparison_entry;
pub mod comparison_result;
pub mod config;
pub mod error;
pub mod log;
pub mod sort;
