pub mod comparison;
pub mod io;
pub mod misc;
pub mod system;

use crate::model::error::comparison::ComparisonError;
use crate::model::error::io::IOError;
use crate::model::error::misc::MiscError;
use crate::model::error::system::SystemError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Comparison(ComparisonError),
    #[error(transparent)]
    IO(IOError),
    #[error(transparent)]
    Misc(MiscError),
    #[error(transparent)]
    System(SystemError),
}

impl Error {
    pub fn level(&self) -> tracing::Level {
        match self {
            Self::Comparison(error) => error.level(),
            Self::IO(error) => error.level(),
            Self::Misc(error) => error.level(),
            Self::System(error) => error.level(),
        }
    }

    pub fn log(&self) {
        match self {
            Self::Comparison(error) => error.log(),
            Self::IO(error) => error.log(),
            Self::Misc(error) => error.log(),
            Self::System(error) => error.log(),
        }
    }

    /// Title used when the error is shown to the user in a dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Comparison(error) => error.title(),
            Self::IO(error) => error.title(),
            Self::Misc(_) => "Unexpected Error",
            Self::System(_) => "System Error",
        }
    }
}

impl From<ComparisonError> for Error {
    fn from(error: ComparisonError) -> Self {
        Self::Comparison(error)
    }
}

impl From<IOError> for Error {
    fn from(error: IOError) -> Self {
        Self::IO(error)
    }
}

impl From<MiscError> for Error {
    fn from(error: MiscError) -> Self {
        Self::Misc(error)
    }
}

impl From<SystemError> for Error {
    fn from(error: SystemError) -> Self {
        Self::System(error)
    }
}
