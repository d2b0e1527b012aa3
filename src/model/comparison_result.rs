use crate::model::comparison_entry::{ComparisonEntry, EntryStatus};
use crate::model::error::io::IOError;
use std::path::{Path, PathBuf};

/// Outcome of one comparison pass, entries ordered by relative path. Entries are
/// expected to be unique per path, which the merge in the comparator guarantees.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    root_a: PathBuf,
    root_b: PathBuf,
    entries: Vec<ComparisonEntry>,
    warnings: Vec<IOError>,
}

impl ComparisonResult {
    pub fn new(
        root_a: PathBuf,
        root_b: PathBuf,
        mut entries: Vec<ComparisonEntry>,
        warnings: Vec<IOError>,
    ) -> Self {
        entries.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        Self {
            root_a,
            root_b,
            entries,
            warnings,
        }
    }

    pub fn root_a(&self) -> &Path {
        &self.root_a
    }

    pub fn root_b(&self) -> &Path {
        &self.root_b
    }

    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn warnings(&self) -> &[IOError] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, relative_path: impl AsRef<Path>) -> Option<&ComparisonEntry> {
        self.entries
            .binary_search_by(|entry| entry.relative_path().cmp(relative_path.as_ref()))
            .ok()
            .map(|index| &self.entries[index])
    }

    pub fn summary(&self) -> ComparisonSummary {
        let mut summary = ComparisonSummary::default();
        for entry in &self.entries {
            match entry.status() {
                EntryStatus::OnlyA => summary.only_a += 1,
                EntryStatus::OnlyB => summary.only_b += 1,
                EntryStatus::Different => summary.different += 1,
                EntryStatus::Same => summary.same += 1,
            }
        }
        summary
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonSummary {
    pub only_a: usize,
    pub only_b: usize,
    pub different: usize,
    pub same: usize,
}

impl ComparisonSummary {
    pub fn count(&self, status: EntryStatus) -> usize {
        match status {
            EntryStatus::OnlyA => self.only_a,
            EntryStatus::OnlyB => self.only_b,
            EntryStatus::Different => self.different,
            EntryStatus::Same => self.same,
        }
    }

    pub fn total(&self) -> usize {
        self.only_a + self.only_b + self.different + self.same
    }

    pub fn is_identical(&self) -> bool {
        self.only_a == 0 && self.only_b == 0 && self.different == 0
    }
}
