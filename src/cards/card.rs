//! Card identity and transient per-card state.
//!
//! A `Combination` is the identity of a card: one value per axis.
//! A `Card` carries a combination plus two mutable flags, `selected`
//! and `matched`, which are gameplay state and never part of identity.
//! Two cards with the same combination are the same card; equality and
//! hashing ignore the flags so that a selected card still compares
//! equal to its deselected self.

use serde::{Deserialize, Serialize};

use super::features::{Color, Number, Shading, Symbol};

/// The identity of a card: one value per feature axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub number: Number,
    pub color: Color,
    pub symbol: Symbol,
    pub shading: Shading,
}

impl Combination {
    /// Create a combination from one value per axis.
    #[must_use]
    pub const fn new(number: Number, color: Color, symbol: Symbol, shading: Shading) -> Self {
        Self {
            number,
            color,
            symbol,
            shading,
        }
    }
}

/// A card in play: identity plus selection/match flags.
///
/// The flags start false and only change through gameplay. A matched
/// card stays on the table, flagged, until its slot is cleared.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    combination: Combination,

    /// Is this card part of the player's current selection?
    pub selected: bool,

    /// Has this card been resolved as part of a matched trio?
    pub matched: bool,
}

impl Card {
    /// Create an unselected, unmatched card.
    #[must_use]
    pub const fn new(combination: Combination) -> Self {
        Self {
            combination,
            selected: false,
            matched: false,
        }
    }

    /// The card's identity.
    #[must_use]
    pub const fn combination(&self) -> Combination {
        self.combination
    }

    /// Flip the selection flag.
    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }
}

// Identity is the combination alone; the flags are transient state.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.combination == other.combination
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.combination.hash(hasher);
    }
}
