//! Pure card values for the projective-set card game.
//!
//! A card is a pattern of six coloured dots. Seven cards are laid out in
//! fixed slots, and the player selects a subset of slots whose dots cancel
//! out (every colour appears an even number of times).
//!
//! This crate holds only values and rules. It performs no I/O.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod card;
mod error;
mod rules;
mod selection;

pub use board::{SLOT_COUNT, Slot, SlotBoard, SlotIndex};
pub use card::{Card, DOTS_PER_CARD, DotColor};
pub use error::CardError;
pub use rules::{find_set, forms_set};
pub use selection::SelectionTracker;
