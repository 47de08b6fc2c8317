//! Selected slot indices.

use crate::SlotIndex;
use tracing::{debug, instrument};

/// Set of selected slot indices, remembered in selection order.
///
/// Membership says nothing about whether the slot holds a card. Order is
/// only used to make submissions deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    indices: Vec<SlotIndex>,
}

impl SelectionTracker {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `index`. Returns `true` if it is now selected.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, index: SlotIndex) -> bool {
        if let Some(position) = self.indices.iter().position(|&i| i == index) {
            self.indices.remove(position);
            debug!(%index, "Deselected slot");
            false
        } else {
            self.indices.push(index);
            debug!(%index, "Selected slot");
            true
        }
    }

    /// Replaces the whole selection. Duplicates keep their first position.
    #[instrument(skip(self, indices))]
    pub fn replace_all(&mut self, indices: impl IntoIterator<Item = SlotIndex>) {
        self.indices.clear();
        for index in indices {
            if !self.indices.contains(&index) {
                self.indices.push(index);
            }
        }
        debug!(selected = ?self.indices, "Selection replaced");
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Checks whether `index` is selected.
    pub fn contains(&self, index: SlotIndex) -> bool {
        self.indices.contains(&index)
    }

    /// Returns the selected indices in selection order.
    pub fn snapshot(&self) -> Vec<SlotIndex> {
        self.indices.clone()
    }

    /// Number of selected slots.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Checks if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(i: usize) -> SlotIndex {
        SlotIndex::new(i).expect("valid index")
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut selection = SelectionTracker::new();
        selection.toggle(index(2));
        let before = selection.clone();

        assert!(selection.toggle(index(5)));
        assert!(!selection.toggle(index(5)));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_snapshot_keeps_selection_order() {
        let mut selection = SelectionTracker::new();
        selection.toggle(index(4));
        selection.toggle(index(0));
        selection.toggle(index(6));
        assert_eq!(selection.snapshot(), [index(4), index(0), index(6)]);
    }

    #[test]
    fn test_replace_all_discards_previous_and_duplicates() {
        let mut selection = SelectionTracker::new();
        selection.toggle(index(1));
        selection.toggle(index(3));

        selection.replace_all([index(0), index(2), index(0)]);

        assert_eq!(selection.snapshot(), [index(0), index(2)]);
        assert!(!selection.contains(index(1)));
        assert!(!selection.contains(index(3)));
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionTracker::new();
        selection.toggle(index(1));
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }
}
