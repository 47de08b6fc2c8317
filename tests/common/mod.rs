//! Scripted backend shared by the integration tests.

#![allow(dead_code)]

use proset::{BackendGateway, Card, DealResult, SlotBoard, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Card from a 6-bit pattern.
pub fn card(bits: u8) -> Card {
    Card::from_bits(bits).expect("valid pattern")
}

/// A successful deal.
pub fn dealt(bits: u8, remaining: u32) -> Result<DealResult, TransportError> {
    Ok(DealResult::Dealt {
        card: card(bits),
        remaining,
    })
}

/// Backend that answers from queues filled by the test.
///
/// Empty queues fall back to: restart -> 63, deal -> exhausted,
/// solve -> no set, submit -> rejected.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    restarts: Mutex<VecDeque<Result<u32, TransportError>>>,
    deals: Mutex<VecDeque<Result<DealResult, TransportError>>>,
    solves: Mutex<VecDeque<Result<Option<Vec<usize>>, TransportError>>>,
    submits: Mutex<VecDeque<Result<bool, TransportError>>>,
    submitted: Mutex<Vec<Vec<Card>>>,
    solved_boards: Mutex<Vec<SlotBoard>>,
    deal_requests: AtomicUsize,
    /// Delay for the n-th deal request, if any.
    deal_delays: Mutex<Vec<Duration>>,
}

impl ScriptedGateway {
    pub fn push_restart(&self, answer: Result<u32, TransportError>) {
        self.restarts.lock().unwrap().push_back(answer);
    }

    pub fn push_deals(&self, answers: impl IntoIterator<Item = Result<DealResult, TransportError>>) {
        self.deals.lock().unwrap().extend(answers);
    }

    pub fn push_solve(&self, answer: Result<Option<Vec<usize>>, TransportError>) {
        self.solves.lock().unwrap().push_back(answer);
    }

    pub fn push_submit(&self, answer: Result<bool, TransportError>) {
        self.submits.lock().unwrap().push_back(answer);
    }

    pub fn set_deal_delays(&self, delays: Vec<Duration>) {
        *self.deal_delays.lock().unwrap() = delays;
    }

    pub fn submitted(&self) -> Vec<Vec<Card>> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn solved_boards(&self) -> Vec<SlotBoard> {
        self.solved_boards.lock().unwrap().clone()
    }

    pub fn deal_requests(&self) -> usize {
        self.deal_requests.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl BackendGateway for ScriptedGateway {
    async fn deal_card(&self) -> Result<DealResult, TransportError> {
        let n = self.deal_requests.fetch_add(1, Ordering::SeqCst);
        let answer = self
            .deals
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(DealResult::Exhausted));
        let delay = self.deal_delays.lock().unwrap().get(n).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        answer
    }

    async fn restart_session(&self) -> Result<u32, TransportError> {
        self.restarts.lock().unwrap().pop_front().unwrap_or(Ok(63))
    }

    async fn solve(&self, board: &SlotBoard) -> Result<Option<Vec<usize>>, TransportError> {
        self.solved_boards.lock().unwrap().push(board.clone());
        self.solves.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }

    async fn submit_cards(&self, cards: &[Card]) -> Result<bool, TransportError> {
        self.submitted.lock().unwrap().push(cards.to_vec());
        self.submits.lock().unwrap().pop_front().unwrap_or(Ok(false))
    }
}
