//! Game session value and its read-only snapshot.

use super::{Notice, Operation, SessionTimer};
use derive_getters::Getters;
use proset_cards::{SelectionTracker, SlotBoard, SlotIndex};
use std::time::Duration;
use tracing::{info, instrument};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Phase {
    /// No game dealt yet.
    Uninitialized,
    /// Game in progress.
    Active,
    /// Card source exhausted; only a restart leaves this phase.
    GameOver,
}

/// State of one game: board, selection, timer, and card count.
///
/// Replaced wholesale on restart. Mutated only by the controller.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    pub(super) board: SlotBoard,
    pub(super) selection: SelectionTracker,
    pub(super) timer: Option<SessionTimer>,
    pub(super) remaining: Option<u32>,
    pub(super) game_over: bool,
}

impl GameSession {
    /// Session before the first deal.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Fresh session with an empty board and a running timer.
    #[instrument]
    pub fn fresh(remaining: u32) -> Self {
        info!("Creating fresh game session");
        Self {
            board: SlotBoard::new(),
            selection: SelectionTracker::new(),
            timer: Some(SessionTimer::start()),
            remaining: Some(remaining),
            game_over: false,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match (self.timer, self.game_over) {
            (None, _) => Phase::Uninitialized,
            (Some(_), false) => Phase::Active,
            (Some(_), true) => Phase::GameOver,
        }
    }

    /// Checks if the card source has run out.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Marks the card source exhausted. Irreversible for this session.
    #[instrument(skip(self))]
    pub(super) fn mark_exhausted(&mut self) {
        if !self.game_over {
            info!("Card source exhausted, game over");
        }
        self.game_over = true;
        self.remaining = Some(0);
        if let Some(timer) = self.timer.as_mut() {
            timer.stop();
        }
    }
}

/// Owned, read-only copy of the session for presentation.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SessionSnapshot {
    /// All seven slots.
    board: SlotBoard,
    /// Selected indices in selection order.
    selection: Vec<SlotIndex>,
    /// Cards left in the source; `None` until the first restart answers.
    remaining: Option<u32>,
    /// Lifecycle phase.
    phase: Phase,
    /// Operation currently running, if any.
    busy: Option<Operation>,
    /// Timer of the current game.
    timer: Option<SessionTimer>,
    /// Latest notice for the player.
    notice: Option<Notice>,
}

impl SessionSnapshot {
    pub(super) fn capture(
        session: &GameSession,
        busy: Option<Operation>,
        notice: Option<Notice>,
    ) -> Self {
        Self {
            board: session.board.clone(),
            selection: session.selection.snapshot(),
            remaining: session.remaining,
            phase: session.phase(),
            busy,
            timer: session.timer,
            notice,
        }
    }

    /// Checks if the game-over banner should show.
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Checks if a slot is selected.
    pub fn is_selected(&self, index: SlotIndex) -> bool {
        self.selection.contains(&index)
    }

    /// Elapsed game time, computed now; `None` before the first game.
    pub fn elapsed(&self) -> Option<Duration> {
        self.timer.map(|timer| timer.elapsed())
    }
}
