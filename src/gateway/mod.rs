//! Backend gateway: the four remote operations the game session relies on.

mod error;
mod http;
mod local;

pub use error::{TransportError, TransportErrorKind};
pub use http::HttpGateway;
pub use local::LocalDealer;

use proset_cards::{Card, SlotBoard};

/// Answer to a single deal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealResult {
    /// A card was dealt.
    Dealt {
        /// The new card.
        card: Card,
        /// Cards left in the source after this deal.
        remaining: u32,
    },
    /// The card source is empty.
    Exhausted,
}

/// Remote card source and judge.
///
/// Every call is an independent round trip that may fail with a
/// [`TransportError`]. Calls take `&self` so a batch of deals can be in
/// flight at once; implementors give no ordering guarantee between them.
#[async_trait::async_trait]
pub trait BackendGateway: Send + Sync {
    /// Deals one card, or reports exhaustion.
    async fn deal_card(&self) -> Result<DealResult, TransportError>;

    /// Starts a fresh card source and returns its size.
    async fn restart_session(&self) -> Result<u32, TransportError>;

    /// Asks for slot indices forming a set on `board`.
    ///
    /// `None` means the backend found no set.
    async fn solve(&self, board: &SlotBoard) -> Result<Option<Vec<usize>>, TransportError>;

    /// Asks whether `cards` form a set.
    async fn submit_cards(&self, cards: &[Card]) -> Result<bool, TransportError>;
}

#[async_trait::async_trait]
impl<G: BackendGateway + ?Sized> BackendGateway for std::sync::Arc<G> {
    async fn deal_card(&self) -> Result<DealResult, TransportError> {
        (**self).deal_card().await
    }

    async fn restart_session(&self) -> Result<u32, TransportError> {
        (**self).restart_session().await
    }

    async fn solve(&self, board: &SlotBoard) -> Result<Option<Vec<usize>>, TransportError> {
        (**self).solve(board).await
    }

    async fn submit_cards(&self, cards: &[Card]) -> Result<bool, TransportError> {
        (**self).submit_cards(cards).await
    }
}
