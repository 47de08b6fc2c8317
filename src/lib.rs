//! Proset client library - session control for a seven-card projective-set game
//!
//! The game shows seven slots, each holding a six-dot card dealt by a
//! backend. The player selects slots whose dots cancel out and submits them;
//! accepted cards are replaced in place until the deck runs out.
//!
//! # Architecture
//!
//! - **Gateway**: the backend's four operations (deal, restart, solve, submit)
//!   behind [`BackendGateway`], with an HTTP adapter and a local dealer
//! - **Session**: [`GameSessionController`], the state machine owning the
//!   board, selection, timer, and card count
//! - **TUI**: a terminal front end driving the controller through
//!   [`SessionHandle`]
//!
//! # Example
//!
//! ```no_run
//! use proset::{GameSessionController, LocalDealer};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let mut controller = GameSessionController::new(LocalDealer::new(Some(1)), Duration::ZERO);
//! controller.initialize().await;
//! controller.request_solve().await;
//! controller.submit_selection().await;
//! println!("{:?}", controller.snapshot().remaining());
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod gateway;
mod session;

/// Terminal front end.
pub mod tui;

/// Command-line interface definitions.
pub mod cli;

// Crate-level exports - Configuration
pub use config::{ClientConfig, ConfigError};

// Crate-level exports - Backend gateway
pub use gateway::{
    BackendGateway, DealResult, HttpGateway, LocalDealer, TransportError, TransportErrorKind,
};

// Crate-level exports - Session control
pub use session::{
    Command, GameSessionController, Notice, Operation, Phase, RestartOutcome, SessionHandle,
    SessionSnapshot, SessionTimer, SolveOutcome, SubmitOutcome, ToggleOutcome, format_elapsed,
};

// Crate-level exports - Card values
pub use proset_cards::{
    Card, DOTS_PER_CARD, DotColor, SLOT_COUNT, SelectionTracker, Slot, SlotBoard, SlotIndex,
};
