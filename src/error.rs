use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io(io::ErrorKind),
    Deserialize,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn io(context: &str, err: &io::Error) -> Self {
        Self {
            kind: ErrorKind::Io(err.kind()),
            message: format!("{context}: {err}"),
        }
    }

    pub fn deserialize(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Deserialize,
            message: message.into(),
        }
    }

    /// True when the error means the input does not exist, as opposed to
    /// existing but being unreadable.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::Io(io::ErrorKind::NotFound)
    }
}
