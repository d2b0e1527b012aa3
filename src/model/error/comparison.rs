use crate::r#macro::loggable::loggable;
use std::path::PathBuf;

loggable! {
    ComparisonError {
        #[error("Directory does not exist: {path}")]
        RootNotFound { path: PathBuf } => tracing::Level::WARN,

        #[error("Path is not a directory: {path}")]
        RootNotDirectory { path: PathBuf } => tracing::Level::WARN,

        #[error("Directory path is empty")]
        EmptyPath => tracing::Level::WARN,

        #[error("Nothing to export, run a comparison first")]
        NoResult => tracing::Level::WARN,
    }
}

impl ComparisonError {
    pub fn title(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. } => "Directory Not Found",
            Self::RootNotDirectory { .. } => "Not a Directory",
            Self::EmptyPath => "Directory Not Selected",
            Self::NoResult => "Nothing to Export",
        }
    }
}
