use crate::core::comparator::DirectoryComparer;
use crate::core::exporter::CsvExporter;
use crate::model::comparison_entry::ComparisonEntry;
use crate::model::comparison_result::ComparisonResult;
use crate::model::error::Error;
use crate::model::error::comparison::ComparisonError;
use crate::model::log::comparison::ComparisonLog;
use crate::model::sort::{SortColumn, SortKey};
use std::path::Path;

/// Everything the result page needs between frames: the selected roots,
/// the last result and the sorted view over it.
#[derive(Default)]
pub struct ComparisonState {
    pub directory_a: String,
    pub directory_b: String,
    result: Option<ComparisonResult>,
    sort_key: SortKey,
    view: Vec<usize>,
}

impl ComparisonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a comparison of the two selected directories. On failure the
    /// previous result is left in place.
    pub fn run_comparison(&mut self) -> Result<&ComparisonResult, Error> {
        let root_a = Path::new(self.directory_a.trim());
        let root_b = Path::new(self.directory_b.trim());
        let result = DirectoryComparer::compare(root_a, root_b)?;
        self.view = self.sort_key.view(result.entries());
        Ok(self.result.insert(result))
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        self.result.as_ref()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Re-sorts the current view by `column`; the comparison is not re-run.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort_key = self.sort_key.toggled(column);
        if let Some(result) = &self.result {
            self.view = self.sort_key.view(result.entries());
        }
        ComparisonLog::Sorted {
            column: self.sort_key.column.to_string(),
            order: self.sort_key.order.to_string(),
        }
        .log();
    }

    pub fn row_count(&self) -> usize {
        self.view.len()
    }

    /// Entry shown at display position `index`.
    pub fn row(&self, index: usize) -> Option<&ComparisonEntry> {
        let result = self.result.as_ref()?;
        self.view
            .get(index)
            .and_then(|&position| result.entries().get(position))
    }

    #[cfg(test)]
    pub fn rows(&self) -> impl Iterator<Item = &ComparisonEntry> {
        (0..self.row_count()).filter_map(|index| self.row(index))
    }

    pub fn export(&self, destination: &Path) -> Result<usize, Error> {
        let result = self.result.as_ref().ok_or(ComparisonError::NoResult)?;
        CsvExporter::export(result, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::comparison_entry::EntryStatus;
    use crate::model::sort::SortOrder;
    use std::fs;

    fn state_with_result() -> (ComparisonState, tempfile::TempDir, tempfile::TempDir) {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        fs::write(a.path().join("a.txt"), vec![0u8; 10]).unwrap();
        fs::write(a.path().join("b.txt"), vec![0u8; 3]).unwrap();
        fs::write(b.path().join("a.txt"), vec![0u8; 20]).unwrap();
        fs::write(b.path().join("c.txt"), vec![0u8; 1]).unwrap();

        let mut state = ComparisonState::new();
        state.directory_a = a.path().to_string_lossy().into_owned();
        state.directory_b = format!("  {}  ", b.path().display());
        state.run_comparison().unwrap();
        (state, a, b)
    }

    fn displayed(state: &ComparisonState) -> Vec<(String, EntryStatus)> {
        state
            .rows()
            .map(|entry| (entry.display_path().to_string(), entry.status()))
            .collect()
    }

    #[test]
    fn comparison_populates_sorted_view() {
        let (state, _a, _b) = state_with_result();
        assert_eq!(
            displayed(&state),
            [
                ("a.txt".to_string(), EntryStatus::Different),
                ("b.txt".to_string(), EntryStatus::OnlyA),
                ("c.txt".to_string(), EntryStatus::OnlyB),
            ]
        );
        assert_eq!(state.row_count(), 3);
        assert!(state.row(3).is_none());
    }

    #[test]
    fn sorting_reorders_view_without_touching_result() {
        let (mut state, _a, _b) = state_with_result();
        state.sort_by(SortColumn::SizeA);
        assert_eq!(state.sort_key(), SortKey::new(SortColumn::SizeA, SortOrder::Ascending));
        let paths: Vec<&str> = state.rows().map(|e| e.display_path()).collect();
        assert_eq!(paths, ["c.txt", "b.txt", "a.txt"]);

        state.sort_by(SortColumn::SizeA);
        let paths: Vec<&str> = state.rows().map(|e| e.display_path()).collect();
        assert_eq!(paths, ["a.txt", "b.txt", "c.txt"]);

        let canonical: Vec<&str> = state
            .result()
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.display_path())
            .collect();
        assert_eq!(canonical, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn failed_comparison_keeps_previous_result() {
        let (mut state, a, _b) = state_with_result();
        state.directory_b = a.path().join("nope").to_string_lossy().into_owned();
        let err = state.run_comparison().unwrap_err();
        assert!(matches!(err, Error::Comparison(ComparisonError::RootNotFound { .. })));
        assert_eq!(state.row_count(), 3);
    }

    #[test]
    fn export_requires_result_and_survives_failure() {
        let dir = tempfile::tempdir().unwrap();
        let empty = ComparisonState::new();
        let err = empty.export(&dir.path().join("out.csv")).unwrap_err();
        assert_eq!(err, Error::Comparison(ComparisonError::NoResult));

        let (state, _a, _b) = state_with_result();
        assert!(state.export(&dir.path().join("missing/out.csv")).is_err());
        assert!(state.result().is_some());
        assert_eq!(state.export(&dir.path().join("out.csv")).unwrap(), 3);
    }
}
