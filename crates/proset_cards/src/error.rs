//! Error type for invalid card values.

use derive_more::{Display, Error};
use tracing::instrument;

/// Invalid card or slot value, with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Card error: {} at {}:{}", message, file, line)]
pub struct CardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CardError {
    /// Creates a new card error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
