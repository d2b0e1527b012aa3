use crate::r#macro::loggable::loggable;
use std::path::PathBuf;

loggable! {
    ComparisonLog {
        #[error("Comparing {root_a} with {root_b}")]
        Started { root_a: PathBuf, root_b: PathBuf } => tracing::Level::INFO,

        #[error("Comparison finished: {entries} entries, {warnings} warnings in {elapsed_ms} ms")]
        Completed { entries: usize, warnings: usize, elapsed_ms: u128 } => tracing::Level::INFO,

        #[error("Skipped symbolic link: {path}")]
        SymlinkSkipped { path: PathBuf } => tracing::Level::DEBUG,

        #[error("Sorted result by {column} ({order})")]
        Sorted { column: String, order: String } => tracing::Level::DEBUG,

        #[error("Exported {rows} rows to {path}")]
        Exported { rows: usize, path: PathBuf } => tracing::Level::INFO,
    }
}
