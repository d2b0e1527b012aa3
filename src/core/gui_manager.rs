use crate::core::app_config::AppConfig;
use crate::model::error::Error;
use crate::model::error::system::SystemError;
use crate::ui::main_page::MainPage;
use crate::utils::assets::Assets;
use crate::utils::font;
use eframe::egui;
use std::sync::Arc;

const APP_NAME: &str = "Directory Comparison Tool";

pub struct GuiManager {
    app_config: Arc<AppConfig>,
}

impl GuiManager {
    pub fn new(app_config: Arc<AppConfig>) -> Self {
        Self { app_config }
    }

    /// Blocks until the window is closed.
    pub fn start(&self) -> Result<(), Error> {
        let app_config = self.app_config.clone();

        let mut viewport = egui::ViewportBuilder::default()
            .with_inner_size([app_config.window_width, app_config.window_height])
            .with_min_inner_size([640.0, 360.0])
            .with_title(APP_NAME);
        match Assets::load_app_icon() {
            Ok(icon_data) => viewport = viewport.with_icon(icon_data),
            Err(err) => err.log(),
        }

        let options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };

        eframe::run_native(
            APP_NAME,
            options,
            Box::new(move |cc| {
                font::setup_system_fonts(&cc.egui_ctx, app_config.font_family.as_deref());
                let visuals = if app_config.dark_mode {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                };
                cc.egui_ctx.set_visuals(visuals);
                Ok(Box::new(MainPage::new(app_config)))
            }),
        )
        .map_err(|err| SystemError::UIPlatformError {
            reason: err.to_string(),
        })?;

        Ok(())
    }
}
