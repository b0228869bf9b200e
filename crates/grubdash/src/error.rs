//! Error types shared by the dish and order resources.

use thiserror::Error;

/// Classification attached to every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    IllegalStateTransition,
    Unavailable,
}

impl ErrorKind {
    /// HTTP-equivalent status class.
    pub const fn status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::IllegalStateTransition => 400,
            Self::NotFound => 404,
            Self::Unavailable => 500,
        }
    }
}

/// Errors that can occur during dish and order operations.
///
/// The display text is the message callers see.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A submitted field failed a presence, shape or numeric rule, or the payload id
    /// disagrees with the target id.
    #[error("{0}")]
    InvalidInput(String),

    /// The target id does not resolve to a stored record.
    #[error("{0}")]
    NotFound(String),

    /// The stored record's status forbids the requested change.
    #[error("{0}")]
    IllegalStateTransition(String),

    /// The owning actor has stopped.
    #[error("Actor communication error: {0}")]
    Unavailable(String),
}

impl RecordError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn illegal(message: impl Into<String>) -> Self {
        Self::IllegalStateTransition(message.into())
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::IllegalStateTransition(_) => ErrorKind::IllegalStateTransition,
            Self::Unavailable(_) => ErrorKind::Unavailable,
        }
    }

    pub const fn status(&self) -> u16 {
        self.kind().status()
    }
}
