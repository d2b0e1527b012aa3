use crate::model::comparison_entry::FileSnapshot;
use crate::model::error::io::IOError;
use crate::model::log::comparison::ComparisonLog;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Files found under one root, keyed by path relative to that root. Keys keep the
/// raw OS names so files whose names are not valid UTF-8 never collide.
pub type TreeSnapshot = BTreeMap<PathBuf, FileSnapshot>;

pub struct Scanner;

impl Scanner {
    /// Walks `root` without following symbolic links. Unreadable sub-paths are
    /// skipped and returned as warnings.
    pub fn scan(root: &Path) -> (TreeSnapshot, Vec<IOError>) {
        let mut snapshot = TreeSnapshot::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let warning = Self::walk_warning(root, &err);
                    warning.log_with_context(root.display());
                    warnings.push(warning);
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_symlink() {
                ComparisonLog::SymlinkSkipped {
                    path: entry.path().to_path_buf(),
                }
                .log();
                continue;
            }
            if !file_type.is_file() {
                continue;
            }

            match Self::snapshot(&entry) {
                Ok(file) => {
                    if let Some(relative_path) = Self::relative_path(root, entry.path()) {
                        snapshot.insert(relative_path, file);
                    }
                }
                Err(warning) => {
                    warning.log_with_context(root.display());
                    warnings.push(warning);
                }
            }
        }

        (snapshot, warnings)
    }

    fn snapshot(entry: &DirEntry) -> Result<FileSnapshot, IOError> {
        let metadata = entry.metadata().map_err(|err| Self::walk_warning(entry.path(), &err))?;
        let modified = metadata
            .modified()
            .map_err(|err| IOError::GetMetadataFailed {
                path: entry.path().to_path_buf(),
                reason: err.to_string(),
            })?;
        Ok(FileSnapshot {
            size: metadata.len(),
            modified: DateTime::<Utc>::from(modified),
        })
    }

    fn walk_warning(fallback: &Path, err: &walkdir::Error) -> IOError {
        let path = err.path().unwrap_or(fallback).to_path_buf();
        match err.io_error() {
            Some(io_error) if io_error.kind() == ErrorKind::PermissionDenied => {
                IOError::PermissionDenied { path }
            }
            Some(io_error) if err.depth() == 0 || err.path().is_some_and(Path::is_dir) => {
                IOError::ReadDirectoryFailed {
                    path,
                    reason: io_error.to_string(),
                }
            }
            _ => IOError::GetMetadataFailed {
                path,
                reason: err.to_string(),
            },
        }
    }

    /// Join key shared by both trees: the normal components of `path` below `root`.
    pub fn relative_path(root: &Path, path: &Path) -> Option<PathBuf> {
        let relative: PathBuf = path
            .strip_prefix(root)
            .ok()?
            .components()
            .filter(|component| matches!(component, Component::Normal(_)))
            .collect();
        if relative.as_os_str().is_empty() {
            None
        } else {
            Some(relative)
        }
    }
}
