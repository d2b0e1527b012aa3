use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    OnlyA,
    OnlyB,
    Different,
    Same,
}

impl EntryStatus {
    pub const ALL: [EntryStatus; 4] = [
        EntryStatus::OnlyA,
        EntryStatus::OnlyB,
        EntryStatus::Different,
        EntryStatus::Same,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::OnlyA => "Only in A",
            EntryStatus::OnlyB => "Only in B",
            EntryStatus::Different => "Different",
            EntryStatus::Same => "Same",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Size and modification time of one file under one root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSnapshot {
    pub size: u64,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonEntry {
    relative_path: PathBuf,
    display_path: String,
    status: EntryStatus,
    size_a: Option<u64>,
    size_b: Option<u64>,
    mtime_a: Option<DateTime<Utc>>,
    mtime_b: Option<DateTime<Utc>>,
}

impl ComparisonEntry {
    /// Classifies a relative path from the snapshots found on each side.
    /// Returns `None` when the path exists on neither side.
    pub fn classify(
        relative_path: PathBuf,
        side_a: Option<&FileSnapshot>,
        side_b: Option<&FileSnapshot>,
    ) -> Option<Self> {
        let status = match (side_a, side_b) {
            (Some(_), None) => EntryStatus::OnlyA,
            (None, Some(_)) => EntryStatus::OnlyB,
            (Some(a), Some(b)) if a == b => EntryStatus::Same,
            (Some(_), Some(_)) => EntryStatus::Different,
            (None, None) => return None,
        };

        Some(Self {
            display_path: display_path(&relative_path),
            relative_path,
            status,
            size_a: side_a.map(|snapshot| snapshot.size),
            size_b: side_b.map(|snapshot| snapshot.size),
            mtime_a: side_a.map(|snapshot| snapshot.modified),
            mtime_b: side_b.map(|snapshot| snapshot.modified),
        })
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// `/`-separated form of the relative path used by the table and the CSV file.
    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    pub fn size_a(&self) -> Option<u64> {
        self.size_a
    }

    pub fn size_b(&self) -> Option<u64> {
        self.size_b
    }

    pub fn mtime_a(&self) -> Option<DateTime<Utc>> {
        self.mtime_a
    }

    pub fn mtime_b(&self) -> Option<DateTime<Utc>> {
        self.mtime_b
    }

    /// Bytes B holds over A, when the file exists on both sides.
    pub fn size_delta(&self) -> Option<i128> {
        Some(i128::from(self.size_b?) - i128::from(self.size_a?))
    }

    /// How much later B was modified than A, when the file exists on both sides.
    pub fn mtime_delta(&self) -> Option<TimeDelta> {
        Some(self.mtime_b?.signed_duration_since(self.mtime_a?))
    }
}

fn display_path(relative_path: &Path) -> String {
    relative_path
        .iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
