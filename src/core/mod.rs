pub mod app_config;
pub mod comparator;
pub mod exporter;
pub mod gui_manager;
pub mod scanner;
pub mod system;
