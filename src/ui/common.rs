use crate::model::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FolderSelectionMode {
    DirectoryA,
    DirectoryB,
}

/// What the shared file dialog was opened for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogPurpose {
    PickDirectory(FolderSelectionMode),
    SaveCsv,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageDialog {
    pub kind: MessageKind,
    pub title: String,
    pub message: String,
}

impl MessageDialog {
    pub fn info<T: Into<String>, M: Into<String>>(title: T, message: M) -> Self {
        Self {
            kind: MessageKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&Error> for MessageDialog {
    fn from(error: &Error) -> Self {
        let kind = if error.level() == tracing::Level::ERROR {
            MessageKind::Error
        } else {
            MessageKind::Warning
        };
        Self {
            kind,
            title: error.title().to_string(),
            message: error.to_string(),
        }
    }
}
