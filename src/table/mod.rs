//! The table: the ordered sequence of slots visible to the player.
//!
//! A slot is either empty or holds one card. The table grows when a
//! deal brings more cards than there are empty slots, and never shrinks
//! on its own: a matched card's slot is cleared in place, keeping every
//! surviving card at a stable index for the presentation layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// One position in the table sequence.
///
/// Emptiness is a first-class variant rather than a nullable card, so
/// every consumer has to handle it explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Empty,
    Occupied(Card),
}

impl Slot {
    /// Check if this slot holds no card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// The card in this slot, if any.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            Slot::Occupied(card) => Some(card),
            Slot::Empty => None,
        }
    }
}

/// The ordered slot sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    slots: Vec<Slot>,
}

impl Table {
    /// Create an empty table with no slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total slots, empty or occupied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the table has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The card at `index`, if the index is valid and the slot occupied.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.slots.get(index).and_then(Slot::card)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Number of empty slots.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_empty()).count()
    }

    /// Indices of slots holding a selected card, in slot order.
    ///
    /// Derived by scanning the flags each call; the cards themselves are
    /// the single source of truth for selection.
    #[must_use]
    pub fn selected_indices(&self) -> SmallVec<[usize; 3]> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.card().is_some_and(|card| card.selected))
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of slots holding a matched card.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.card().is_some_and(|card| card.matched))
            .count()
    }

    /// Place dealt cards: fill empty slots in index order, then append
    /// any surplus as new slots at the end.
    pub fn place(&mut self, cards: &[Card]) {
        let mut dealt = cards.iter().copied();

        for slot in &mut self.slots {
            if slot.is_empty() {
                match dealt.next() {
                    Some(card) => *slot = Slot::Occupied(card),
                    None => return,
                }
            }
        }

        self.slots.extend(dealt.map(Slot::Occupied));
    }

    /// Overwrite the slot at `index` with `card`.
    ///
    /// No-op when the index is out of bounds.
    pub fn put(&mut self, index: usize, card: Card) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::Occupied(card);
        }
    }

    /// Clear every slot holding a matched card, in place.
    ///
    /// Returns how many slots were cleared. Never deals replacements;
    /// that is the selection engine's call.
    pub fn clear_matched(&mut self) -> usize {
        let mut cleared = 0;
        for slot in &mut self.slots {
            if slot.card().is_some_and(|card| card.matched) {
                *slot = Slot::Empty;
                cleared += 1;
            }
        }
        cleared
    }

    /// Clear every selection flag on the table.
    pub fn deselect_all(&mut self) {
        for slot in &mut self.slots {
            if let Slot::Occupied(card) = slot {
                card.selected = false;
            }
        }
    }

    /// Drop all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
