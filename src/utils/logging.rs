use crate::core::app_config::AppConfig;
use crate::model::error::Error;
use crate::model::error::system::SystemError;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_PREFIX: &str = "dircompare";
const LOG_FILE_SUFFIX: &str = "log";

pub struct Logging;

impl Logging {
    /// Installs the global subscriber. `RUST_LOG` takes precedence over the configured level.
    pub fn initialize(app_config: &AppConfig) -> Result<WorkerGuard, Error> {
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .build(&app_config.log_directory)
            .map_err(|err| SystemError::LoggerInitializeFailed {
                reason: err.to_string(),
            })?;
        let (writer, guard) = tracing_appender::non_blocking(file_appender);

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(app_config.log_level()).into())
            .from_env_lossy();

        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false);

        let registry = tracing_subscriber::registry().with(filter).with(file_layer);
        #[cfg(debug_assertions)]
        let registry = registry.with(fmt::layer().with_target(false));

        registry
            .try_init()
            .map_err(|err| SystemError::LoggerInitializeFailed {
                reason: err.to_string(),
            })?;
        log_panics::init();

        Ok(guard)
    }
}
