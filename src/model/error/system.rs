use crate::r#macro::loggable::loggable;
use std::path::PathBuf;

loggable! {
    SystemError {
        #[error("Failed to read configuration: {path} ({reason})")]
        ReadConfigFailed { path: PathBuf, reason: String } => tracing::Level::ERROR,

        #[error("Invalid configuration: {reason}")]
        InvalidConfig { reason: String } => tracing::Level::ERROR,

        #[error("Failed to initialize logger: {reason}")]
        LoggerInitializeFailed { reason: String } => tracing::Level::ERROR,

        #[error("UI platform error: {reason}")]
        UIPlatformError { reason: String } => tracing::Level::ERROR,
    }
}
