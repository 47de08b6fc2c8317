//! In-process card source for offline play.

use super::{BackendGateway, DealResult, TransportError};
use proset_cards::{Card, DOTS_PER_CARD, SlotBoard, find_set, forms_set};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Shuffled deck plus the generator that shuffles it.
#[derive(Debug)]
struct Deck {
    cards: VecDeque<Card>,
    rng: StdRng,
}

impl Deck {
    fn reshuffle(&mut self) {
        let mut cards = full_deck();
        cards.shuffle(&mut self.rng);
        self.cards = cards.into();
    }

    fn remaining(&self) -> u32 {
        self.cards.len() as u32
    }
}

/// Every card with at least one dot, in pattern order.
fn full_deck() -> Vec<Card> {
    (1..1u8 << DOTS_PER_CARD)
        .filter_map(|bits| Card::from_bits(bits).ok())
        .collect()
}

/// Backend gateway that deals from a local shuffled deck.
///
/// Plays by the same rules as the HTTP backend: 63 cards, a set is any group whose
/// dots all appear an even number of times, and hints are the first such
/// group in subset-counting order. Never fails with a transport error.
#[derive(Debug)]
pub struct LocalDealer {
    deck: Mutex<Deck>,
}

impl LocalDealer {
    /// Creates a dealer with a freshly shuffled deck.
    ///
    /// A seed makes the deal order reproducible.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut deck = Deck {
            cards: VecDeque::new(),
            rng,
        };
        deck.reshuffle();
        info!(remaining = deck.remaining(), "Local dealer ready");
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Cards left in the local deck.
    pub async fn remaining(&self) -> u32 {
        self.deck.lock().await.remaining()
    }
}

#[async_trait::async_trait]
impl BackendGateway for LocalDealer {
    #[instrument(skip(self))]
    async fn deal_card(&self) -> Result<DealResult, TransportError> {
        let mut deck = self.deck.lock().await;
        match deck.cards.pop_front() {
            Some(card) => {
                let remaining = deck.remaining();
                debug!(remaining, "Dealt local card");
                Ok(DealResult::Dealt { card, remaining })
            }
            None => {
                debug!("Local deck exhausted");
                Ok(DealResult::Exhausted)
            }
        }
    }

    #[instrument(skip(self))]
    async fn restart_session(&self) -> Result<u32, TransportError> {
        let mut deck = self.deck.lock().await;
        deck.reshuffle();
        info!(remaining = deck.remaining(), "Local deck reshuffled");
        Ok(deck.remaining())
    }

    #[instrument(skip(self, board))]
    async fn solve(&self, board: &SlotBoard) -> Result<Option<Vec<usize>>, TransportError> {
        Ok(find_set(board).map(|indices| indices.into_iter().map(usize::from).collect()))
    }

    #[instrument(skip(self, cards), fields(count = cards.len()))]
    async fn submit_cards(&self, cards: &[Card]) -> Result<bool, TransportError> {
        let accepted = forms_set(cards);
        debug!(accepted, "Judged submission");
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_full_deck_has_every_pattern_once() {
        let deck = full_deck();
        assert_eq!(deck.len(), 63);
        let unique: HashSet<_> = deck.iter().map(Card::bits).collect();
        assert_eq!(unique.len(), 63);
        assert!(!unique.contains(&0));
    }

    #[tokio::test]
    async fn test_deals_until_exhausted() {
        let dealer = LocalDealer::new(Some(7));
        let mut seen = HashSet::new();
        for expected_remaining in (0..63).rev() {
            match dealer.deal_card().await.expect("local deal") {
                DealResult::Dealt { card, remaining } => {
                    assert_eq!(remaining, expected_remaining);
                    assert!(seen.insert(card.bits()));
                }
                DealResult::Exhausted => panic!("deck ran out early"),
            }
        }
        assert_eq!(dealer.deal_card().await.expect("local deal"), DealResult::Exhausted);
        assert_eq!(dealer.restart_session().await.expect("restart"), 63);
        assert_eq!(dealer.remaining().await, 63);
    }

    #[tokio::test]
    async fn test_same_seed_same_order() {
        let a = LocalDealer::new(Some(42));
        let b = LocalDealer::new(Some(42));
        for _ in 0..10 {
            assert_eq!(
                a.deal_card().await.expect("deal"),
                b.deal_card().await.expect("deal")
            );
        }
    }
}
