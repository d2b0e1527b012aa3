use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigTable {
    #[serde(rename = "Config", default)]
    pub config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_directory: PathBuf,   // rolled daily
    pub log_level: String,        // trace | debug | info | warn | error
    pub window_width: f32,        // logical pixels
    pub window_height: f32,       // logical pixels
    pub dark_mode: bool,
    pub timestamp_format: String, // strftime, local time
    pub export_file_name: String,
    pub font_family: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_directory: PathBuf::from("./logs"),
            log_level: "info".to_string(),
            window_width: 1280.0,
            window_height: 720.0,
            dark_mode: true,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            export_file_name: "comparison.csv".to_string(),
            font_family: None,
        }
    }
}
