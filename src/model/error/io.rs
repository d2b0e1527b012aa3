use crate::r#macro::loggable::loggable;
use std::path::PathBuf;

loggable! {
    IOError {
        #[error("Permission denied, skipped: {path}")]
        PermissionDenied { path: PathBuf } => tracing::Level::WARN,

        #[error("Failed to read directory: {path} ({reason})")]
        ReadDirectoryFailed { path: PathBuf, reason: String } => tracing::Level::WARN,

        #[error("Failed to get file metadata: {path} ({reason})")]
        GetMetadataFailed { path: PathBuf, reason: String } => tracing::Level::WARN,

        #[error("Failed to create file: {path} ({reason})")]
        CreateFileFailed { path: PathBuf, reason: String } => tracing::Level::ERROR,

        #[error("Failed to write file: {path} ({reason})")]
        WriteFileFailed { path: PathBuf, reason: String } => tracing::Level::ERROR,
    }
}

impl IOError {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CreateFileFailed { .. } | Self::WriteFileFailed { .. } => "Export Failed",
            _ => "File System Error",
        }
    }
}
