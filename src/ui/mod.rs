pub mod common;
pub mod main_page;
pub mod result_table;
pub mod state;
