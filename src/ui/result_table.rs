use crate::model::comparison_entry::{ComparisonEntry, EntryStatus};
use crate::model::sort::SortColumn;
use crate::ui::state::ComparisonState;
use chrono::{DateTime, Local, TimeDelta, Utc};
use eframe::egui;
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 20.0;
const HEADER_HEIGHT: f32 = 24.0;
const NOT_APPLICABLE: &str = "-";

pub struct ResultTable<'a> {
    state: &'a ComparisonState,
    timestamp_format: &'a str,
}

impl<'a> ResultTable<'a> {
    pub fn new(state: &'a ComparisonState, timestamp_format: &'a str) -> Self {
        Self {
            state,
            timestamp_format,
        }
    }

    /// Draws the table and returns the header the user clicked, if any.
    pub fn show(&self, ui: &mut egui::Ui) -> Option<SortColumn> {
        let sort_key = self.state.sort_key();
        let mut clicked = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(360.0).at_least(120.0).clip(true))
            .column(Column::initial(100.0).at_least(80.0))
            .columns(Column::initial(90.0).at_least(60.0), 2)
            .column(Column::initial(170.0).at_least(100.0))
            .column(Column::remainder().at_least(100.0))
            .min_scrolled_height(0.0)
            .header(HEADER_HEIGHT, |mut header| {
                for column in SortColumn::ALL {
                    header.col(|ui| {
                        let text = if sort_key.column == column {
                            format!("{} {}", column.name(), sort_key.order.arrow())
                        } else {
                            column.name().to_string()
                        };
                        let button =
                            egui::Button::new(egui::RichText::new(text).strong()).frame(false);
                        if ui.add(button).on_hover_text("Click to sort").clicked() {
                            clicked = Some(column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, self.state.row_count(), |mut row| {
                    let Some(entry) = self.state.row(row.index()) else {
                        return;
                    };
                    let hint = difference_hint(entry);
                    for column in SortColumn::ALL {
                        row.col(|ui| {
                            let response = self.cell(ui, entry, column);
                            let hint = hint.as_deref().filter(|_| column != SortColumn::Path);
                            if let Some(hint) = hint {
                                response.on_hover_text(hint);
                            }
                        });
                    }
                });
            });

        clicked
    }

    fn cell(
        &self,
        ui: &mut egui::Ui,
        entry: &ComparisonEntry,
        column: SortColumn,
    ) -> egui::Response {
        match column {
            SortColumn::Path => ui
                .label(entry.display_path())
                .on_hover_text(entry.display_path()),
            SortColumn::Status => {
                let status = entry.status();
                ui.colored_label(status_color(status), status.label())
            }
            SortColumn::SizeA => ui.label(format_size(entry.size_a())),
            SortColumn::SizeB => ui.label(format_size(entry.size_b())),
            SortColumn::MtimeA => ui.label(format_time(entry.mtime_a(), self.timestamp_format)),
            SortColumn::MtimeB => ui.label(format_time(entry.mtime_b(), self.timestamp_format)),
        }
    }
}

pub fn status_color(status: EntryStatus) -> egui::Color32 {
    match status {
        EntryStatus::OnlyA => egui::Color32::YELLOW,
        EntryStatus::OnlyB => egui::Color32::LIGHT_BLUE,
        EntryStatus::Different => egui::Color32::LIGHT_RED,
        EntryStatus::Same => egui::Color32::GRAY,
    }
}

fn format_size(size: Option<u64>) -> String {
    size.map_or_else(|| NOT_APPLICABLE.to_string(), |size| size.to_string())
}

/// Hover text for DIFFERENT rows: how far B is from A in size and modification time.
fn difference_hint(entry: &ComparisonEntry) -> Option<String> {
    if entry.status() != EntryStatus::Different {
        return None;
    }
    let size = entry.size_delta()?;
    let mtime = entry.mtime_delta()?;
    Some(format!(
        "Size difference (B - A): {size:+} bytes\nLast modified difference (B - A): {}",
        format_minutes(mtime)
    ))
}

fn format_minutes(delta: TimeDelta) -> String {
    let minutes = delta.num_milliseconds() as f64 / 60_000.0;
    format!("{minutes:+.1} minutes")
}

fn format_time(time: Option<DateTime<Utc>>, format: &str) -> String {
    time.map_or_else(
        || NOT_APPLICABLE.to_string(),
        |time| time.with_timezone(&Local).format(format).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::comparison_entry::FileSnapshot;
    use chrono::TimeZone;

    #[test]
    fn missing_values_render_as_dash() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(42)), "42");
        assert_eq!(format_time(None, "%Y"), "-");
    }

    fn entry(a: (u64, i64), b: Option<(u64, i64)>) -> ComparisonEntry {
        let to_snapshot = |(size, seconds): (u64, i64)| FileSnapshot {
            size,
            modified: Utc.timestamp_opt(seconds, 0).unwrap(),
        };
        let a = to_snapshot(a);
        let b = b.map(to_snapshot);
        ComparisonEntry::classify("f".into(), Some(&a), b.as_ref()).unwrap()
    }

    #[test]
    fn different_rows_describe_size_and_time_gap() {
        let hint = difference_hint(&entry((10, 100), Some((20, 190)))).unwrap();
        assert_eq!(
            hint,
            "Size difference (B - A): +10 bytes\nLast modified difference (B - A): +1.5 minutes"
        );

        let hint = difference_hint(&entry((20, 700), Some((20, 100)))).unwrap();
        assert!(hint.contains("+0 bytes"), "{hint}");
        assert!(hint.ends_with("-10.0 minutes"), "{hint}");
    }

    #[test]
    fn other_rows_have_no_difference_hint() {
        assert_eq!(difference_hint(&entry((10, 100), Some((10, 100)))), None);
        assert_eq!(difference_hint(&entry((10, 100), None)), None);
    }

    #[test]
    fn times_use_configured_format() {
        let time = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(format_time(Some(time), "%Y"), "2024");
    }
}
