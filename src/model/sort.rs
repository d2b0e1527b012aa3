use crate::model::comparison_entry::ComparisonEntry;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Path,
    Status,
    SizeA,
    SizeB,
    MtimeA,
    MtimeB,
}

impl SortColumn {
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Path,
        SortColumn::Status,
        SortColumn::SizeA,
        SortColumn::SizeB,
        SortColumn::MtimeA,
        SortColumn::MtimeB,
    ];

    /// Column name shared by the table header and the CSV header.
    pub fn name(&self) -> &'static str {
        match self {
            SortColumn::Path => "path",
            SortColumn::Status => "status",
            SortColumn::SizeA => "size_a",
            SortColumn::SizeB => "size_b",
            SortColumn::MtimeA => "mtime_a",
            SortColumn::MtimeB => "mtime_b",
        }
    }

    fn compare(&self, a: &ComparisonEntry, b: &ComparisonEntry) -> Ordering {
        match self {
            SortColumn::Path => a.relative_path().cmp(b.relative_path()),
            SortColumn::Status => a.status().cmp(&b.status()),
            SortColumn::SizeA => a.size_a().cmp(&b.size_a()),
            SortColumn::SizeB => a.size_b().cmp(&b.size_b()),
            SortColumn::MtimeA => a.mtime_a().cmp(&b.mtime_a()),
            SortColumn::MtimeB => a.mtime_b().cmp(&b.mtime_b()),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "⬆",
            SortOrder::Descending => "⬇",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ascending"),
            SortOrder::Descending => f.write_str("descending"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl Default for SortKey {
    fn default() -> Self {
        Self {
            column: SortColumn::Path,
            order: SortOrder::Ascending,
        }
    }
}

impl SortKey {
    pub fn new(column: SortColumn, order: SortOrder) -> Self {
        Self { column, order }
    }

    /// Clicking the active column flips the order, any other column starts ascending.
    pub fn toggled(&self, column: SortColumn) -> Self {
        if self.column == column {
            Self::new(column, self.order.reversed())
        } else {
            Self::new(column, SortOrder::Ascending)
        }
    }

    // Missing values sort before present ones; ties fall back to the path.
    pub fn compare(&self, a: &ComparisonEntry, b: &ComparisonEntry) -> Ordering {
        let ordering = self
            .column
            .compare(a, b)
            .then_with(|| a.relative_path().cmp(b.relative_path()));
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Indices into `entries` in display order. The entries themselves are left untouched.
    pub fn view(&self, entries: &[ComparisonEntry]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..entries.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&entries[a], &entries[b]));
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::comparison_entry::{EntryStatus, FileSnapshot};
    use chrono::{TimeZone, Utc};

    fn entry(path: &str, a: Option<(u64, i64)>, b: Option<(u64, i64)>) -> ComparisonEntry {
        let to_snapshot = |(size, seconds): (u64, i64)| FileSnapshot {
            size,
            modified: Utc.timestamp_opt(seconds, 0).unwrap(),
        };
        let a = a.map(to_snapshot);
        let b = b.map(to_snapshot);
        ComparisonEntry::classify(path.into(), a.as_ref(), b.as_ref()).unwrap()
    }

    fn sample() -> Vec<ComparisonEntry> {
        vec![
            entry("a.txt", Some((10, 100)), Some((20, 100))),
            entry("b.txt", Some((5, 300)), None),
            entry("c.txt", None, Some((7, 200))),
            entry("d.txt", Some((5, 50)), Some((5, 50))),
        ]
    }

    fn paths(entries: &[ComparisonEntry], view: &[usize]) -> Vec<String> {
        view.iter()
            .map(|&index| entries[index].display_path().to_string())
            .collect()
    }

    #[test]
    fn default_key_is_path_ascending() {
        let entries = sample();
        let view = SortKey::default().view(&entries);
        assert_eq!(paths(&entries, &view), ["a.txt", "b.txt", "c.txt", "d.txt"]);
    }

    #[test]
    fn size_sort_puts_missing_first_and_breaks_ties_by_path() {
        let entries = sample();
        let view = SortKey::new(SortColumn::SizeA, SortOrder::Ascending).view(&entries);
        assert_eq!(paths(&entries, &view), ["c.txt", "b.txt", "d.txt", "a.txt"]);

        let view = SortKey::new(SortColumn::SizeA, SortOrder::Descending).view(&entries);
        assert_eq!(paths(&entries, &view), ["a.txt", "d.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn status_and_time_sorts() {
        let entries = sample();
        let view = SortKey::new(SortColumn::Status, SortOrder::Ascending).view(&entries);
        let statuses: Vec<EntryStatus> = view.iter().map(|&i| entries[i].status()).collect();
        assert_eq!(
            statuses,
            [
                EntryStatus::OnlyA,
                EntryStatus::OnlyB,
                EntryStatus::Different,
                EntryStatus::Same
            ]
        );

        let view = SortKey::new(SortColumn::MtimeB, SortOrder::Descending).view(&entries);
        assert_eq!(paths(&entries, &view), ["c.txt", "a.txt", "d.txt", "b.txt"]);
    }

    #[test]
    fn every_key_keeps_every_entry() {
        let entries = sample();
        for column in SortColumn::ALL {
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let mut view = SortKey::new(column, order).view(&entries);
                view.sort_unstable();
                assert_eq!(view, [0, 1, 2, 3], "{column} {order}");
            }
        }
    }

    #[test]
    fn toggling_flips_only_the_active_column() {
        let key = SortKey::default();
        let flipped = key.toggled(SortColumn::Path);
        assert_eq!(flipped, SortKey::new(SortColumn::Path, SortOrder::Descending));

        let switched = flipped.toggled(SortColumn::SizeB);
        assert_eq!(switched, SortKey::new(SortColumn::SizeB, SortOrder::Ascending));
    }
}
