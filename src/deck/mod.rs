//! Deck generation and drawing.
//!
//! The deck is the set of cards not yet dealt to the table. It is built
//! by a cartesian expansion of the four axis value tables in a fixed
//! order (number outermost, shading innermost), which makes duplicates
//! structurally impossible and the pre-shuffle contents bit-identical
//! across runs.
//!
//! Dealing order is decided up front by shuffling the freshly generated
//! pile with the game's seeded `GameRng`; from then on `draw` just pops
//! cards. See `SetGame` for the seed plumbing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::features::{Color, Number, Shading, Symbol};
use crate::cards::{Card, Combination};
use crate::core::GameRng;

/// Total cards in a full deck: 3^4 feature combinations.
pub const DECK_SIZE: usize = 81;

/// The undealt portion of the card universe.
///
/// Internally an ordered draw pile; the order carries no meaning beyond
/// "next to be dealt" and is fixed by the shuffle at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    draw_pile: Vec<Card>,
}

impl Deck {
    /// Generate a full 81-card deck and shuffle it with `rng`.
    #[must_use]
    pub fn standard(rng: &mut GameRng) -> Self {
        let mut draw_pile = Vec::with_capacity(DECK_SIZE);

        // Fixed axis order; the enum tables are each duplicate-free, so
        // the product cannot repeat a combination.
        for &number in &Number::ALL {
            for &color in &Color::ALL {
                for &symbol in &Symbol::ALL {
                    for &shading in &Shading::ALL {
                        draw_pile.push(Card::new(Combination::new(number, color, symbol, shading)));
                    }
                }
            }
        }

        debug_assert_eq!(
            draw_pile
                .iter()
                .collect::<rustc_hash::FxHashSet<_>>()
                .len(),
            DECK_SIZE
        );

        rng.shuffle(&mut draw_pile);

        Self { draw_pile }
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Check if the deck has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Check if a combination is still undealt.
    #[must_use]
    pub fn contains(&self, combination: Combination) -> bool {
        self.draw_pile
            .iter()
            .any(|card| card.combination() == combination)
    }

    /// The remaining cards, in draw order (front drawn first).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.draw_pile
    }

    /// Remove and return exactly `amount` cards.
    ///
    /// Returns `None` without touching the pile when fewer than
    /// `amount` remain; a draw is never partial.
    pub fn draw(&mut self, amount: usize) -> Option<SmallVec<[Card; 3]>> {
        if amount > self.draw_pile.len() {
            return None;
        }
        Some(self.draw_pile.drain(..amount).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_deck_has_81_unique_cards() {
        let mut rng = GameRng::new(42);
        let deck = Deck::standard(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);

        let unique: FxHashSet<Combination> =
            deck.cards().iter().map(|card| card.combination()).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_standard_deck_covers_every_axis_pairing() {
        let mut rng = GameRng::new(42);
        let deck = Deck::standard(&mut rng);

        // Each (color, shading) pairing appears once per number x symbol.
        for &color in &Color::ALL {
            for &shading in &Shading::ALL {
                let count = deck
                    .cards()
                    .iter()
                    .filter(|card| {
                        card.combination().color == color && card.combination().shading == shading
                    })
                    .count();
                assert_eq!(count, 9);
            }
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        let deck1 = Deck::standard(&mut GameRng::new(7));
        let deck2 = Deck::standard(&mut GameRng::new(7));

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_different_seed_different_order() {
        let deck1 = Deck::standard(&mut GameRng::new(1));
        let deck2 = Deck::standard(&mut GameRng::new(2));

        assert_ne!(deck1.cards(), deck2.cards());
    }

    #[test]
    fn test_draw_removes_exactly_amount() {
        let mut deck = Deck::standard(&mut GameRng::new(42));

        let drawn = deck.draw(12).unwrap();
        assert_eq!(drawn.len(), 12);
        assert_eq!(deck.len(), DECK_SIZE - 12);

        for card in &drawn {
            assert!(!deck.contains(card.combination()));
        }
    }

    #[test]
    fn test_draw_never_partial() {
        let mut deck = Deck::standard(&mut GameRng::new(42));
        deck.draw(80).unwrap();

        assert_eq!(deck.draw(3), None);
        assert_eq!(deck.len(), 1);

        let last = deck.draw(1).unwrap();
        assert_eq!(last.len(), 1);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_exhaustive_dealing_covers_universe() {
        let mut deck = Deck::standard(&mut GameRng::new(42));
        let mut seen = FxHashSet::default();

        while let Some(batch) = deck.draw(3) {
            for card in batch {
                assert!(seen.insert(card.combination()));
            }
        }

        assert_eq!(seen.len(), DECK_SIZE);
    }
}
