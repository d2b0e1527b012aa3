use crate::core::app_config::{AppConfig, CONFIG_PATH};
use crate::core::gui_manager::GuiManager;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::utils::logging::Logging;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

pub struct System {
    app_config: Arc<AppConfig>,
    // Flushes buffered log lines when dropped.
    log_guard: WorkerGuard,
}

impl System {
    pub fn initialize() -> Result<Self, Error> {
        let app_config = AppConfig::new()?;
        let log_guard = Logging::initialize(&app_config)?;
        SystemLog::Initializing.log();
        if app_config.source().is_none() {
            SystemLog::ConfigNotFound {
                path: PathBuf::from(CONFIG_PATH),
            }
            .log();
        }
        SystemLog::InitializeComplete.log();
        Ok(Self {
            app_config: Arc::new(app_config),
            log_guard,
        })
    }

    pub fn run(&self) -> Result<(), Error> {
        SystemLog::Online.log();
        GuiManager::new(self.app_config.clone()).start()
    }

    pub fn terminate(self) {
        SystemLog::Terminating.log();
        SystemLog::TerminateComplete.log();
        drop(self.log_guard);
    }
}
