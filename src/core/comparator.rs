use crate::core::scanner::{Scanner, TreeSnapshot};
use crate::model::comparison_entry::ComparisonEntry;
use crate::model::comparison_result::ComparisonResult;
use crate::model::error::Error;
use crate::model::error::comparison::ComparisonError;
use crate::model::log::comparison::ComparisonLog;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct DirectoryComparer;

impl DirectoryComparer {
    /// Compares the files under `root_a` and `root_b` by size and modification time.
    ///
    /// Both roots are validated before anything is read. The returned entries
    /// cover the union of both trees, ordered by relative path.
    pub fn compare(root_a: &Path, root_b: &Path) -> Result<ComparisonResult, Error> {
        Self::validate_root(root_a)?;
        Self::validate_root(root_b)?;

        ComparisonLog::Started {
            root_a: root_a.to_path_buf(),
            root_b: root_b.to_path_buf(),
        }
        .log();
        let started = Instant::now();

        let (tree_a, mut warnings) = Scanner::scan(root_a);
        let (tree_b, warnings_b) = Scanner::scan(root_b);
        warnings.extend(warnings_b);

        let entries = Self::classify(&tree_a, &tree_b);
        let result = ComparisonResult::new(
            root_a.to_path_buf(),
            root_b.to_path_buf(),
            entries,
            warnings,
        );

        ComparisonLog::Completed {
            entries: result.len(),
            warnings: result.warnings().len(),
            elapsed_ms: started.elapsed().as_millis(),
        }
        .log();
        Ok(result)
    }

    /// One entry per relative path in either snapshot, in path order.
    pub fn classify(tree_a: &TreeSnapshot, tree_b: &TreeSnapshot) -> Vec<ComparisonEntry> {
        let paths: BTreeSet<&PathBuf> = tree_a.keys().chain(tree_b.keys()).collect();
        paths
            .into_iter()
            .filter_map(|path| {
                ComparisonEntry::classify(path.clone(), tree_a.get(path), tree_b.get(path))
            })
            .collect()
    }

    fn validate_root(root: &Path) -> Result<(), ComparisonError> {
        if root.as_os_str().is_empty() {
            return Err(ComparisonError::EmptyPath);
        }
        if !root.exists() {
            return Err(ComparisonError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(ComparisonError::RootNotDirectory {
                path: root.to_path_buf(),
            });
        }
        Ok(())
    }
}
