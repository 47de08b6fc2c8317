//! User-facing notices raised by session operations.

use serde::{Deserialize, Serialize};

/// A controller operation, used to label work in flight and failures.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// Start a fresh game.
    Restart,
    /// Ask for a hint.
    Solve,
    /// Submit the selected cards.
    Submit,
    /// Deal one card into a slot.
    Deal,
}

/// Generic notification for the player.
///
/// Only the most recent notice is kept; it is cleared when the next
/// operation starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Notice {
    /// A backend round trip failed and the operation was abandoned.
    #[display("Error during {operation}: {message}")]
    TransportFailure {
        /// Operation that failed.
        operation: Operation,
        /// Error description.
        message: String,
    },
    /// The submitted cards do not form a set.
    #[display("Not a set")]
    Rejected,
    /// The backend found no set on the board.
    #[display("No set on the board")]
    NoHint,
    /// The card source ran out.
    #[display("Game over! No more cards remaining.")]
    GameOver,
}
