//! Transport error for backend round trips.

use derive_more::{Display, Error};
use tracing::{error, instrument};

/// What went wrong on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransportErrorKind {
    /// The backend could not be reached.
    #[display("unreachable")]
    Unreachable,
    /// The backend answered with a non-2xx status.
    #[display("status {_0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[display("malformed body")]
    MalformedBody,
}

/// Transport error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Transport error ({}): {} at {}:{}", kind, message, file, line)]
pub struct TransportError {
    /// Failure category.
    pub kind: TransportErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TransportError {
    /// Creates a new transport error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(%kind, error_message = %message, "Transport error created");
        Self {
            kind,
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an unreachable backend.
    #[track_caller]
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Unreachable, message)
    }

    /// Shorthand for a non-2xx status.
    #[track_caller]
    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Status(code), message)
    }

    /// Shorthand for an unparseable body.
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::MalformedBody, message)
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::status(status.as_u16(), format!("HTTP error: {err}"))
        } else if err.is_decode() {
            Self::malformed(format!("Decode error: {err}"))
        } else {
            Self::unreachable(format!("Request failed: {err}"))
        }
    }
}
