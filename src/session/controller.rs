//! Game session controller: the state machine behind the four player actions.

use super::{GameSession, Notice, Operation, SessionSnapshot};
use crate::gateway::{BackendGateway, DealResult, TransportError};
use futures::future::join_all;
use proset_cards::{Slot, SlotIndex};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Result of [`GameSessionController::restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    /// A new game was created and dealt.
    Started,
    /// The backend restart failed; the previous session is untouched.
    Abandoned,
}

/// Result of [`GameSessionController::toggle_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The slot is now selected.
    Selected,
    /// The slot is no longer selected.
    Deselected,
    /// The game is over; nothing changed.
    Ignored,
}

/// Result of [`GameSessionController::request_solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The selection was replaced with these indices.
    Hinted(Vec<SlotIndex>),
    /// The backend found no set; the selection was cleared.
    NoHint,
    /// The game is over; nothing changed.
    Ignored,
    /// The backend call failed; nothing changed.
    Abandoned,
}

/// Result of [`GameSessionController::submit_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The cards formed a set; their slots were cleared and redealt.
    Accepted,
    /// The cards did not form a set; nothing changed.
    Rejected,
    /// The game is over; nothing changed.
    Ignored,
    /// The backend call failed; nothing changed.
    Abandoned,
}

/// Owns one [`GameSession`] and drives it through the backend.
///
/// Operations take `&mut self`, so a controller never runs two at once.
/// Every state change is published on a watch channel; see
/// [`GameSessionController::subscribe`].
///
/// Backend failures never escape: they are logged, surfaced as a
/// [`Notice::TransportFailure`], and the operation stops where it was.
#[derive(Debug)]
pub struct GameSessionController<G> {
    gateway: G,
    session: GameSession,
    settle_delay: Duration,
    busy: Option<Operation>,
    notice: Option<Notice>,
    updates: watch::Sender<SessionSnapshot>,
}

impl<G: BackendGateway> GameSessionController<G> {
    /// Creates a controller with an uninitialized session.
    ///
    /// `settle_delay` is a pause between clearing slots and refilling them,
    /// giving front ends time to show the cleared board. Zero is fine.
    #[instrument(skip(gateway))]
    pub fn new(gateway: G, settle_delay: Duration) -> Self {
        info!("Creating game session controller");
        let session = GameSession::uninitialized();
        let (updates, _) = watch::channel(SessionSnapshot::capture(&session, None, None));
        Self {
            gateway,
            session,
            settle_delay,
            busy: None,
            notice: None,
            updates,
        }
    }

    /// Returns a receiver that sees every published state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.subscribe()
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session, self.busy, self.notice.clone())
    }

    /// Returns the backend gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Deals the first game. Same effect as [`Self::restart`].
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) -> RestartOutcome {
        info!("Initializing game");
        self.restart().await
    }

    /// Replaces the current session with a freshly dealt one.
    ///
    /// Legal at any time, including after game over.
    #[instrument(skip(self))]
    pub async fn restart(&mut self) -> RestartOutcome {
        self.begin(Operation::Restart);

        let answer = self.gateway.restart_session().await;
        let remaining = match answer {
            Ok(remaining) => remaining,
            Err(e) => {
                self.fail(Operation::Restart, &e);
                self.finish();
                return RestartOutcome::Abandoned;
            }
        };

        // Clear phase: publish the empty board before any deal is issued.
        self.session = GameSession::fresh(remaining);
        self.publish();
        self.settle().await;

        let all: Vec<SlotIndex> = SlotIndex::all().collect();
        self.deal_into(&all).await;

        info!(
            remaining = ?self.session.remaining,
            occupied = self.session.board.occupied_count(),
            game_over = self.session.is_game_over(),
            "Game dealt"
        );
        self.finish();
        RestartOutcome::Started
    }

    /// Flips selection of one slot. No-op once the game is over.
    ///
    /// The slot does not need to hold a card.
    #[instrument(skip(self))]
    pub fn toggle_selection(&mut self, index: SlotIndex) -> ToggleOutcome {
        self.notice = None;
        if self.session.is_game_over() {
            debug!("Game over, ignoring toggle");
            self.publish();
            return ToggleOutcome::Ignored;
        }

        let outcome = if self.session.selection.toggle(index) {
            ToggleOutcome::Selected
        } else {
            ToggleOutcome::Deselected
        };
        self.publish();
        outcome
    }

    /// Asks the backend for a set and makes it the whole selection.
    ///
    /// Any previous selection is discarded, not merged.
    #[instrument(skip(self))]
    pub async fn request_solve(&mut self) -> SolveOutcome {
        if self.session.is_game_over() {
            debug!("Game over, ignoring solve");
            return SolveOutcome::Ignored;
        }
        self.begin(Operation::Solve);

        let answer = self.gateway.solve(&self.session.board).await;
        let outcome = match answer {
            Ok(Some(raw)) => {
                self.session.selection.replace_all(Self::slot_indices(raw));
                let hint = self.session.selection.snapshot();
                info!(hint = ?hint, "Selection replaced with hint");
                SolveOutcome::Hinted(hint)
            }
            Ok(None) => {
                self.session.selection.clear();
                self.notice = Some(Notice::NoHint);
                info!("Backend found no set");
                SolveOutcome::NoHint
            }
            Err(e) => {
                self.fail(Operation::Solve, &e);
                SolveOutcome::Abandoned
            }
        };

        self.finish();
        outcome
    }

    /// Submits the cards in the selected slots.
    ///
    /// Selected slots that are empty are left out of the submission. On
    /// acceptance the selected slots are cleared, the selection is emptied,
    /// and each cleared slot is redealt in place. On rejection nothing
    /// changes and a [`Notice::Rejected`] is raised.
    #[instrument(skip(self))]
    pub async fn submit_selection(&mut self) -> SubmitOutcome {
        if self.session.is_game_over() {
            debug!("Game over, ignoring submit");
            return SubmitOutcome::Ignored;
        }
        self.begin(Operation::Submit);

        let selected = self.session.selection.snapshot();
        let cards = self.session.board.cards_at(&selected);
        debug!(selected = ?selected, submitted = cards.len(), "Submitting selection");

        let answer = self.gateway.submit_cards(&cards).await;
        let outcome = match answer {
            Ok(true) => {
                info!(slots = ?selected, "Selection accepted");

                // Clear phase, published before the redeal starts.
                self.session.board.clear(&selected);
                self.session.selection.clear();
                self.publish();
                self.settle().await;

                self.deal_into(&selected).await;
                SubmitOutcome::Accepted
            }
            Ok(false) => {
                info!("Selection rejected");
                self.notice = Some(Notice::Rejected);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                self.fail(Operation::Submit, &e);
                SubmitOutcome::Abandoned
            }
        };

        self.finish();
        outcome
    }

    /// Deals one card into each listed slot, all requests in flight at once.
    ///
    /// Each answer is written to the slot that asked for it, whatever order
    /// the answers arrive in. A failed deal leaves its slot empty. If any
    /// deal reports exhaustion the game ends.
    #[instrument(skip(self), fields(count = indices.len()))]
    async fn deal_into(&mut self, indices: &[SlotIndex]) {
        let gateway = &self.gateway;
        let answers = join_all(
            indices
                .iter()
                .map(|&index| async move { (index, gateway.deal_card().await) }),
        )
        .await;

        let mut placed = Vec::with_capacity(answers.len());
        let mut lowest_remaining: Option<u32> = None;
        let mut exhausted = false;

        for (index, answer) in answers {
            match answer {
                Ok(DealResult::Dealt { card, remaining }) => {
                    placed.push((index, Slot::Occupied(card)));
                    lowest_remaining =
                        Some(lowest_remaining.map_or(remaining, |lowest| lowest.min(remaining)));
                }
                Ok(DealResult::Exhausted) => {
                    debug!(%index, "No card for slot, source exhausted");
                    exhausted = true;
                }
                Err(e) => {
                    warn!(%index, error = %e, "Deal failed, slot left empty");
                    self.fail(Operation::Deal, &e);
                }
            }
        }

        self.session.board.replace_subset(placed);
        if let Some(remaining) = lowest_remaining {
            self.session.remaining = Some(remaining);
        }
        if exhausted {
            self.session.mark_exhausted();
            self.notice = Some(Notice::GameOver);
        }
    }

    /// Converts backend indices, dropping any outside the board.
    fn slot_indices(raw: Vec<usize>) -> Vec<SlotIndex> {
        raw.into_iter()
            .filter_map(|i| {
                let index = SlotIndex::new(i);
                if index.is_none() {
                    warn!(index = i, "Backend returned index outside the board");
                }
                index
            })
            .collect()
    }

    async fn settle(&self) {
        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }
    }

    fn begin(&mut self, operation: Operation) {
        debug!(%operation, "Operation started");
        self.busy = Some(operation);
        self.notice = None;
        self.publish();
    }

    fn finish(&mut self) {
        if let Some(operation) = self.busy.take() {
            debug!(%operation, "Operation finished");
        }
        self.publish();
    }

    fn fail(&mut self, operation: Operation, error: &TransportError) {
        warn!(%operation, error = %error, "Backend call failed, operation abandoned");
        self.notice = Some(Notice::TransportFailure {
            operation,
            message: error.message.clone(),
        });
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::LocalDealer;

    #[tokio::test]
    async fn test_offline_game_plays_hint_to_acceptance() {
        let mut controller = GameSessionController::new(LocalDealer::new(Some(3)), Duration::ZERO);
        assert_eq!(controller.initialize().await, RestartOutcome::Started);
        assert_eq!(controller.snapshot().board().occupied_count(), 7);
        assert_eq!(*controller.snapshot().remaining(), Some(56));

        let SolveOutcome::Hinted(hint) = controller.request_solve().await else {
            panic!("a full board always holds a set");
        };
        assert_eq!(controller.snapshot().selection(), &hint);

        assert_eq!(controller.submit_selection().await, SubmitOutcome::Accepted);
        let snapshot = controller.snapshot();
        assert!(snapshot.selection().is_empty());
        assert_eq!(snapshot.board().occupied_count(), 7);
        assert_eq!(*snapshot.remaining(), Some(56 - hint.len() as u32));
    }
}
