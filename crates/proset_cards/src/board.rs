//! The fixed seven-slot display.

use crate::{Card, CardError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of slots on the board.
pub const SLOT_COUNT: usize = 7;

/// Index of a slot, always in `0..SLOT_COUNT`.
///
/// Indices are stable identifiers: a redealt card lands at the index that
/// requested it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// Creates a slot index, or `None` when out of range.
    pub fn new(index: usize) -> Option<Self> {
        (index < SLOT_COUNT).then(|| Self(index as u8))
    }

    /// Returns the index as a `usize`.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Iterates over every slot index in board order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SLOT_COUNT as u8).map(Self)
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = CardError;

    #[track_caller]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| {
            CardError::new(format!("Slot index {index} outside 0..{SLOT_COUNT}"))
        })
    }
}

impl From<SlotIndex> for usize {
    fn from(index: SlotIndex) -> Self {
        index.get()
    }
}

/// One board position: empty, or holding a card.
///
/// Serialized as a card or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Card>", into = "Option<Card>")]
pub enum Slot {
    /// No card dealt yet, or cleared pending redeal.
    #[default]
    Empty,
    /// A dealt card.
    Occupied(Card),
}

impl Slot {
    /// Returns the card in this slot, if any.
    pub fn card(&self) -> Option<&Card> {
        match self {
            Self::Empty => None,
            Self::Occupied(card) => Some(card),
        }
    }

    /// Checks if the slot holds no card.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Option<Card>> for Slot {
    fn from(card: Option<Card>) -> Self {
        card.map_or(Self::Empty, Self::Occupied)
    }
}

impl From<Slot> for Option<Card> {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Empty => None,
            Slot::Occupied(card) => Some(card),
        }
    }
}

/// All seven slots in board order.
///
/// The length never changes; operations replace slot contents only.
/// Serialized as an array of seven card-or-`null` entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotBoard {
    slots: [Slot; SLOT_COUNT],
}

impl SlotBoard {
    /// Creates a board with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot at the given index.
    pub fn get(&self, index: SlotIndex) -> Slot {
        self.slots[index.get()]
    }

    /// Returns all slots as a fixed-size array.
    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    /// Iterates over `(index, slot)` pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, Slot)> + '_ {
        SlotIndex::all().zip(self.slots.iter().copied())
    }

    /// Replaces every slot at once.
    #[instrument(skip(self, slots))]
    pub fn replace_all(&mut self, slots: [Slot; SLOT_COUNT]) {
        self.slots = slots;
        debug!(occupied = self.occupied_count(), "Board replaced");
    }

    /// Replaces the listed slots, each value landing at its paired index.
    #[instrument(skip(self, replacements))]
    pub fn replace_subset(&mut self, replacements: impl IntoIterator<Item = (SlotIndex, Slot)>) {
        for (index, slot) in replacements {
            debug!(%index, empty = slot.is_empty(), "Replacing slot");
            self.slots[index.get()] = slot;
        }
    }

    /// Empties the listed slots.
    pub fn clear(&mut self, indices: &[SlotIndex]) {
        self.replace_subset(indices.iter().map(|&index| (index, Slot::Empty)));
    }

    /// Collects the cards at the listed slots in the given order.
    ///
    /// Empty slots are skipped.
    pub fn cards_at(&self, indices: &[SlotIndex]) -> Vec<Card> {
        indices
            .iter()
            .filter_map(|&index| self.get(index).card().copied())
            .collect()
    }

    /// Counts the slots that hold a card.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(bits: u8) -> Card {
        Card::from_bits(bits).expect("valid pattern")
    }

    fn index(i: usize) -> SlotIndex {
        SlotIndex::new(i).expect("valid index")
    }

    #[test]
    fn test_slot_index_bounds() {
        assert_eq!(SlotIndex::new(0).map(SlotIndex::get), Some(0));
        assert_eq!(SlotIndex::new(6).map(SlotIndex::get), Some(6));
        assert_eq!(SlotIndex::new(7), None);
        assert!(SlotIndex::try_from(9usize).is_err());
        assert_eq!(SlotIndex::all().count(), SLOT_COUNT);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = SlotBoard::new();
        assert_eq!(board.slots().len(), SLOT_COUNT);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_replace_subset_preserves_pairing() {
        let mut board = SlotBoard::new();
        board.replace_subset([
            (index(5), Slot::Occupied(card(5))),
            (index(3), Slot::Occupied(card(3))),
        ]);

        assert_eq!(board.get(index(3)), Slot::Occupied(card(3)));
        assert_eq!(board.get(index(5)), Slot::Occupied(card(5)));
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.slots().len(), SLOT_COUNT);
    }

    #[test]
    fn test_clear_and_cards_at_skip_empty() {
        let mut board = SlotBoard::new();
        board.replace_all([
            Slot::Occupied(card(1)),
            Slot::Occupied(card(2)),
            Slot::Occupied(card(3)),
            Slot::Empty,
            Slot::Occupied(card(5)),
            Slot::Occupied(card(6)),
            Slot::Occupied(card(7)),
        ]);
        board.clear(&[index(1)]);

        let cards = board.cards_at(&[index(4), index(1), index(3), index(0)]);
        assert_eq!(cards, [card(5), card(1)]);
    }

    #[test]
    fn test_board_serializes_as_cards_and_nulls() {
        let mut board = SlotBoard::new();
        board.replace_subset([(index(1), Slot::Occupied(card(0b111111)))]);

        let json = serde_json::to_value(&board).expect("serialize");
        let entries = json.as_array().expect("array");
        assert_eq!(entries.len(), SLOT_COUNT);
        assert!(entries[0].is_null());
        assert_eq!(entries[1], serde_json::json!([true, true, true, true, true, true]));
    }
}
