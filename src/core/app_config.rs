use crate::model::config::{Config, ConfigTable};
use crate::model::error::Error;
use crate::model::error::system::SystemError;
use chrono::format::{Item, StrftimeItems};
use std::fs;
use std::io::ErrorKind;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_PATH: &str = "./config.toml";

pub struct AppConfig {
    config: Config,
    source: Option<PathBuf>,
}

impl AppConfig {
    pub fn new() -> Result<Self, Error> {
        Self::from_path(CONFIG_PATH)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let toml_string = match fs::read_to_string(path) {
            Ok(toml_string) => toml_string,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(Self {
                    config: Config::default(),
                    source: None,
                });
            }
            Err(err) => Err(SystemError::ReadConfigFailed {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?,
        };
        let config = Self::parse(&toml_string)?;
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn parse(toml_string: &str) -> Result<Config, Error> {
        let config = toml::from_str::<ConfigTable>(toml_string)
            .map_err(|err| SystemError::InvalidConfig {
                reason: err.to_string(),
            })?
            .config;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Path the configuration was read from, `None` when running on defaults.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.config.log_level).unwrap_or(tracing::Level::INFO)
    }

    fn validate(config: &Config) -> Result<(), Error> {
        let invalid = |reason: String| SystemError::InvalidConfig { reason };

        if tracing::Level::from_str(&config.log_level).is_err() {
            Err(invalid(format!("unknown log level '{}'", config.log_level)))?
        }
        if !Self::validate_dimension(config.window_width)
            || !Self::validate_dimension(config.window_height)
        {
            Err(invalid(format!(
                "window size must be positive, got {}x{}",
                config.window_width, config.window_height
            )))?
        }
        if StrftimeItems::new(&config.timestamp_format).any(|item| matches!(item, Item::Error)) {
            Err(invalid(format!(
                "bad timestamp format '{}'",
                config.timestamp_format
            )))?
        }
        if config.export_file_name.trim().is_empty() {
            Err(invalid("export file name is empty".to_string()))?
        }
        Ok(())
    }

    fn validate_dimension(value: f32) -> bool {
        value.is_finite() && value > 0.0
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: Config::default(),
            source: None,
        }
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(AppConfig::parse("").unwrap(), Config::default());
        assert_eq!(AppConfig::parse("[Config]\n").unwrap(), Config::default());
    }

    #[test]
    fn partial_table_overrides_only_given_fields() {
        let config =
            AppConfig::parse("[Config]\nlog_level = \"debug\"\ndark_mode = false\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(!config.dark_mode);
        assert_eq!(config.window_width, Config::default().window_width);
    }

    #[test]
    fn invalid_values_are_rejected() {
        for document in [
            "[Config]\nlog_level = \"loud\"\n",
            "[Config]\nwindow_width = 0.0\n",
            "[Config]\nwindow_height = -5.0\n",
            "[Config]\ntimestamp_format = \"%Q\"\n",
            "[Config]\nexport_file_name = \" \"\n",
            "[Config]\nwindow_width = \"wide\"\n",
        ] {
            let err = AppConfig::parse(document).unwrap_err();
            assert!(
                matches!(err, Error::System(SystemError::InvalidConfig { .. })),
                "{document}"
            );
        }
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let app_config = AppConfig::from_path(dir.path().join("config.toml")).unwrap();
        assert!(app_config.source().is_none());
        assert_eq!(app_config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[Config]\nlog_level = \"warn\"\nexport_file_name = \"diff.csv\"").unwrap();

        let app_config = AppConfig::from_path(&path).unwrap();
        assert_eq!(app_config.source(), Some(path.as_path()));
        assert_eq!(app_config.log_level(), tracing::Level::WARN);
        assert_eq!(app_config.export_file_name, "diff.csv");
    }
}
