use crate::model::comparison_entry::{ComparisonEntry, EntryStatus};
use crate::model::comparison_result::ComparisonResult;
use crate::model::error::Error;
use crate::model::error::io::IOError;
use crate::model::log::comparison::ComparisonLog;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One CSV row. Field order is the column order of the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub path: String,
    pub status: EntryStatus,
    pub size_a: Option<u64>,
    pub size_b: Option<u64>,
    pub mtime_a: Option<String>,
    pub mtime_b: Option<String>,
}

impl From<&ComparisonEntry> for CsvRow {
    fn from(entry: &ComparisonEntry) -> Self {
        Self {
            path: entry.display_path().to_string(),
            status: entry.status(),
            size_a: entry.size_a(),
            size_b: entry.size_b(),
            mtime_a: entry.mtime_a().map(format_timestamp),
            mtime_b: entry.mtime_b().map(format_timestamp),
        }
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub struct CsvExporter;

impl CsvExporter {
    /// Writes `result` to `destination`, one row per entry in path order.
    pub fn export(result: &ComparisonResult, destination: &Path) -> Result<usize, Error> {
        let file = File::create(destination).map_err(|err| IOError::CreateFileFailed {
            path: destination.to_path_buf(),
            reason: err.to_string(),
        })?;
        let rows = Self::write(result, file).map_err(|err| IOError::WriteFileFailed {
            path: destination.to_path_buf(),
            reason: err.to_string(),
        })?;

        ComparisonLog::Exported {
            rows,
            path: destination.to_path_buf(),
        }
        .log();
        Ok(rows)
    }

    pub fn write<W: Write>(result: &ComparisonResult, writer: W) -> Result<usize, csv::Error> {
        let mut writer = csv::Writer::from_writer(writer);
        for entry in result.entries() {
            writer.serialize(CsvRow::from(entry))?;
        }
        // The header comes from the first serialized row; write it explicitly for empty results.
        if result.is_empty() {
            writer.write_record(Self::HEADER)?;
        }
        writer.flush()?;
        Ok(result.len())
    }

    pub const HEADER: [&'static str; 6] =
        ["path", "status", "size_a", "size_b", "mtime_a", "mtime_b"];

    /// Appends `.csv` when the chosen destination has no extension.
    pub fn with_default_extension(destination: PathBuf) -> PathBuf {
        if destination.extension().is_some() {
            destination
        } else {
            destination.with_extension("csv")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::comparison_entry::FileSnapshot;
    use chrono::TimeZone;

    fn result() -> ComparisonResult {
        let at = |seconds| FileSnapshot {
            size: 0,
            modified: Utc.timestamp_opt(seconds, 0).unwrap(),
        };
        let sized = |size, seconds| FileSnapshot {
            size,
            ..at(seconds)
        };
        let entries = vec![
            ComparisonEntry::classify("c.txt".into(), None, Some(&sized(6, 20))).unwrap(),
            ComparisonEntry::classify(
                "a, \"quoted\".txt".into(),
                Some(&sized(10, 10)),
                Some(&sized(20, 10)),
            )
            .unwrap(),
            ComparisonEntry::classify("b.txt".into(), Some(&sized(6, 30)), None).unwrap(),
            ComparisonEntry::classify("d/e.txt".into(), Some(&at(5)), Some(&at(5))).unwrap(),
        ];
        ComparisonResult::new("A".into(), "B".into(), entries, Vec::new())
    }

    fn export_to_string(result: &ComparisonResult) -> String {
        let mut buffer = Vec::new();
        CsvExporter::write(result, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn header_and_row_layout() {
        let text = export_to_string(&result());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("path,status,size_a,size_b,mtime_a,mtime_b"));
        assert_eq!(
            lines.next(),
            Some(concat!(
                "\"a, \"\"quoted\"\".txt\",DIFFERENT,10,20,",
                "1970-01-01T00:00:10Z,1970-01-01T00:00:10Z"
            ))
        );
        assert_eq!(lines.next(), Some("b.txt,ONLY_A,6,,1970-01-01T00:00:30Z,"));
        assert_eq!(lines.next(), Some("c.txt,ONLY_B,,6,,1970-01-01T00:00:20Z"));
        assert_eq!(
            lines.next(),
            Some("d/e.txt,SAME,0,0,1970-01-01T00:00:05Z,1970-01-01T00:00:05Z")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn reparsed_rows_match_result() {
        let result = result();
        let text = export_to_string(&result);

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let rows: Vec<CsvRow> = reader.deserialize().map(|row| row.unwrap()).collect();
        let parsed: Vec<(String, EntryStatus)> =
            rows.into_iter().map(|row| (row.path, row.status)).collect();
        let expected: Vec<(String, EntryStatus)> = result
            .entries()
            .iter()
            .map(|entry| (entry.display_path().to_string(), entry.status()))
            .collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn empty_result_still_has_header() {
        let empty = ComparisonResult::new("A".into(), "B".into(), Vec::new(), Vec::new());
        assert_eq!(export_to_string(&empty), "path,status,size_a,size_b,mtime_a,mtime_b\n");
    }

    #[test]
    fn export_writes_file_and_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("report.csv");
        assert_eq!(CsvExporter::export(&result(), &destination).unwrap(), 4);
        assert!(std::fs::read_to_string(&destination).unwrap().starts_with("path,status"));

        let unwritable = dir.path().join("missing").join("report.csv");
        let err = CsvExporter::export(&result(), &unwritable).unwrap_err();
        assert!(matches!(
            err,
            Error::IO(IOError::CreateFileFailed { ref path, .. }) if *path == unwritable
        ));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_keep_the_csv_error() {
        let err = CsvExporter::write(&result(), BrokenPipe).unwrap_err();
        match err.kind() {
            csv::ErrorKind::Io(io_error) => {
                assert_eq!(io_error.kind(), std::io::ErrorKind::BrokenPipe)
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn default_extension_is_added_only_when_missing() {
        assert_eq!(
            CsvExporter::with_default_extension(PathBuf::from("out/report")),
            PathBuf::from("out/report.csv")
        );
        assert_eq!(
            CsvExporter::with_default_extension(PathBuf::from("out/report.txt")),
            PathBuf::from("out/report.txt")
        );
    }
}
