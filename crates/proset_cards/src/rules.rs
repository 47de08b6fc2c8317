//! Set rule: a group of cards is a set when every dot cancels out.

use crate::{Card, SLOT_COUNT, SlotBoard, SlotIndex};
use tracing::{debug, instrument};

/// Checks whether every dot position appears an even number of times.
///
/// An empty group trivially qualifies.
pub fn forms_set(cards: &[Card]) -> bool {
    cards.iter().fold(0u8, |parity, card| parity ^ card.bits()) == 0
}

/// Finds the first group of occupied slots that forms a set.
///
/// Subsets are tried in counting order with slot 0 as the most significant
/// position, so `[6]` is tried before `[5]` and `[5]` before `[5, 6]`.
/// Subsets touching an empty slot are skipped.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn find_set(board: &SlotBoard) -> Option<Vec<SlotIndex>> {
    let slots = board.slots();
    for mask in 1u32..(1 << SLOT_COUNT) {
        let members: Vec<SlotIndex> = SlotIndex::all()
            .filter(|index| mask & (1 << (SLOT_COUNT - 1 - index.get())) != 0)
            .collect();
        let cards: Option<Vec<Card>> = members
            .iter()
            .map(|index| slots[index.get()].card().copied())
            .collect();
        if let Some(cards) = cards
            && forms_set(&cards)
        {
            debug!(?members, "Found set");
            return Some(members);
        }
    }
    debug!("No set on board");
    None
}
