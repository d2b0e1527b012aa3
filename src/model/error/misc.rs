use crate::r#macro::loggable::loggable;

loggable! {
    MiscError {
        #[error("Asset file not found: {name}")]
        AssetFileNotFound { name: String } => tracing::Level::ERROR,

        #[error("Failed to decode asset: {name} ({reason})")]
        DeserializeError { name: String, reason: String } => tracing::Level::ERROR,
    }
}
