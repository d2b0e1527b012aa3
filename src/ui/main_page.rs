use crate::core::app_config::AppConfig;
use crate::core::exporter::CsvExporter;
use crate::model::comparison_entry::EntryStatus;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::ui::common::{DialogPurpose, FolderSelectionMode, MessageDialog, MessageKind};
use crate::ui::result_table::{status_color, ResultTable};
use crate::ui::state::ComparisonState;
use eframe::egui;
use eframe::{App, Frame};
use egui_file_dialog::FileDialog;
use std::path::PathBuf;
use std::sync::Arc;

pub struct MainPage {
    app_config: Arc<AppConfig>,
    state: ComparisonState,

    file_dialog: FileDialog,
    dialog_purpose: Option<DialogPurpose>,

    message: Option<MessageDialog>,
    show_warnings: bool,
}

impl MainPage {
    pub fn new(app_config: Arc<AppConfig>) -> Self {
        let file_dialog = FileDialog::new().default_file_name(&app_config.export_file_name);
        Self {
            app_config,
            state: ComparisonState::new(),
            file_dialog,
            dialog_purpose: None,
            message: None,
            show_warnings: false,
        }
    }

    fn report_error(&mut self, error: &Error) {
        error.log();
        self.message = Some(MessageDialog::from(error));
    }

    fn handle_compare(&mut self) {
        match self.state.run_comparison() {
            Ok(result) => {
                self.show_warnings = !result.warnings().is_empty();
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn handle_export(&mut self, destination: PathBuf) {
        let destination = CsvExporter::with_default_extension(destination);
        match self.state.export(&destination) {
            Ok(_) => {
                self.message = Some(MessageDialog::info(
                    "Export Successful",
                    format!(
                        "The comparison result has been exported to {}",
                        destination.display()
                    ),
                ));
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn draw_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("directory_inputs").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Directory Comparison Tool");
            ui.add_space(6.0);

            egui::Grid::new("directory_grid")
                .num_columns(3)
                .spacing([10.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Directory A:");
                    ui.add_sized(
                        [560.0, 20.0],
                        egui::TextEdit::singleline(&mut self.state.directory_a)
                            .hint_text("Directory Path"),
                    );
                    if ui.button("📁 Browse").clicked() {
                        self.dialog_purpose =
                            Some(DialogPurpose::PickDirectory(FolderSelectionMode::DirectoryA));
                        self.file_dialog.pick_directory();
                    }
                    ui.end_row();

                    ui.label("Directory B:");
                    ui.add_sized(
                        [560.0, 20.0],
                        egui::TextEdit::singleline(&mut self.state.directory_b)
                            .hint_text("Directory Path"),
                    );
                    if ui.button("📁 Browse").clicked() {
                        self.dialog_purpose =
                            Some(DialogPurpose::PickDirectory(FolderSelectionMode::DirectoryB));
                        self.file_dialog.pick_directory();
                    }
                    ui.end_row();
                });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("🔍 Compare Directories").clicked() {
                    self.handle_compare();
                }

                let has_result = self.state.result().is_some();
                let export = ui.add_enabled(has_result, egui::Button::new("💾 Save as CSV"));
                if export.clicked() {
                    self.dialog_purpose = Some(DialogPurpose::SaveCsv);
                    self.file_dialog.save_file();
                }
            });
            ui.add_space(6.0);
        });
    }

    fn draw_status_bar(&mut self, ctx: &egui::Context) {
        let Some(result) = self.state.result() else {
            return;
        };
        let summary = result.summary();
        let warning_count = result.warnings().len();
        let roots = format!(
            "A: {}\nB: {}",
            result.root_a().display(),
            result.root_b().display()
        );

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if summary.is_identical() {
                    ui.label("✅ Directories match").on_hover_text(roots.as_str());
                } else {
                    ui.label(format!("Files: {}", summary.total()))
                        .on_hover_text(roots.as_str());
                }
                for status in EntryStatus::ALL {
                    ui.separator();
                    ui.colored_label(
                        status_color(status),
                        format!("{}: {}", status.label(), summary.count(status)),
                    );
                }

                if warning_count > 0 {
                    ui.separator();
                    if ui
                        .small_button(format!("⚠ Warnings: {warning_count}"))
                        .clicked()
                    {
                        self.show_warnings = true;
                    }
                }
            });
        });
    }

    fn draw_result_table(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.result().is_none() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label("Select two directories and click Compare");
                });
                return;
            }

            if self.state.row_count() == 0 {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label("✅ Both directories are empty");
                });
                return;
            }

            let clicked = egui::ScrollArea::horizontal()
                .show(ui, |ui| {
                    ResultTable::new(&self.state, &self.app_config.timestamp_format).show(ui)
                })
                .inner;
            if let Some(column) = clicked {
                self.state.sort_by(column);
            }
        });
    }

    fn draw_warnings_window(&mut self, ctx: &egui::Context) {
        if !self.show_warnings {
            return;
        }
        let Some(result) = self.state.result() else {
            self.show_warnings = false;
            return;
        };

        let mut open = true;
        egui::Window::new(format!("Skipped Paths ({})", result.warnings().len()))
            .open(&mut open)
            .resizable(true)
            .default_width(600.0)
            .default_height(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (i, warning) in result.warnings().iter().enumerate() {
                        egui::Frame::new()
                            .fill(if i % 2 == 0 {
                                ui.visuals().faint_bg_color
                            } else {
                                egui::Color32::TRANSPARENT
                            })
                            .inner_margin(4.0)
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(format!("{}.", i + 1));
                                    ui.colored_label(egui::Color32::LIGHT_RED, warning.to_string());
                                });
                            });
                    }
                });
            });

        if !open {
            self.show_warnings = false;
        }
    }

    fn draw_message_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(message.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match message.kind {
                    MessageKind::Info => ui.label(message.message.as_str()),
                    MessageKind::Warning => {
                        ui.colored_label(egui::Color32::YELLOW, message.message.as_str())
                    }
                    MessageKind::Error => {
                        ui.colored_label(egui::Color32::LIGHT_RED, message.message.as_str())
                    }
                };
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.message = None;
        }
    }

    fn update_file_dialog(&mut self, ctx: &egui::Context) {
        self.file_dialog.update(ctx);

        if let Some(path) = self.file_dialog.take_picked() {
            match self.dialog_purpose.take() {
                Some(DialogPurpose::PickDirectory(FolderSelectionMode::DirectoryA)) => {
                    self.state.directory_a = path.to_string_lossy().to_string();
                }
                Some(DialogPurpose::PickDirectory(FolderSelectionMode::DirectoryB)) => {
                    self.state.directory_b = path.to_string_lossy().to_string();
                }
                Some(DialogPurpose::SaveCsv) => self.handle_export(path),
                None => {}
            }
        }
    }
}

impl App for MainPage {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.draw_top_panel(ctx);
        self.draw_status_bar(ctx);
        self.draw_result_table(ctx);
        self.draw_warnings_window(ctx);
        self.draw_message_dialog(ctx);
        self.update_file_dialog(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        SystemLog::GuiExited.log();
    }
}
