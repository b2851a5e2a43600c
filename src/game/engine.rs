//! The game engine: selection state machine, dealing, and scoring.
//!
//! `SetGame` owns the deck, the table, the match history, and the
//! score. The presentation layer drives it through `select_card`,
//! `deal`, and `reset`, and observes state through read-only borrows.
//!
//! Every illegal or currently-meaningless action is all-or-nothing: the
//! state is untouched and the outcome reports why. There is no error
//! type to propagate; an ignored click is a normal part of play.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::matcher::{is_set, Trio};
use crate::cards::Card;
use crate::core::{GameRng, GameRngState, Score, MATCH_REWARD, MISMATCH_PENALTY};
use crate::deck::Deck;
use crate::table::Table;

/// Default number of cards per deal.
pub const DEAL_BATCH: usize = 3;

/// Why a `select_card` call changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The index does not reference a table slot.
    OutOfBounds,
    /// The slot holds no card.
    EmptySlot,
    /// The card was already resolved as part of a matched trio.
    AlreadyMatched,
    /// Deselecting a member of a trio awaiting evaluation.
    PendingTrio,
}

/// Outcome of a `select_card` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The click mutated the game state.
    Applied,
    /// The click was a no-op.
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    /// Check if the click took effect.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, SelectOutcome::Applied)
    }
}

/// The full game: deck, table, match history, and score.
///
/// Single-threaded and synchronous; callers serialize access.
#[derive(Clone, Debug)]
pub struct SetGame {
    deck: Deck,
    table: Table,
    matched: Vec<Trio>,
    score: Score,
    rng: GameRng,
}

impl SetGame {
    /// Start a game with a freshly shuffled 81-card deck.
    ///
    /// The seed fixes the dealing order, making games reproducible.
    /// The table starts empty; call `deal` to begin play.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let deck = Deck::standard(&mut rng);
        Self {
            deck,
            table: Table::new(),
            matched: Vec::new(),
            score: Score::new(),
            rng,
        }
    }

    // === Observers ===

    /// Cards not yet dealt.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The ordered table slots.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// History of resolved trios, oldest first.
    #[must_use]
    pub fn matched(&self) -> &[Trio] {
        &self.matched
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    // === Operations ===

    /// Deal `amount` cards from the deck onto the table.
    ///
    /// Empty slots fill in index order before the table grows. Returns
    /// the dealt cards in placement order. When `amount` is zero or the
    /// deck holds fewer than `amount` cards, returns an empty batch
    /// with no state change at all.
    pub fn deal(&mut self, amount: usize) -> SmallVec<[Card; 3]> {
        if amount == 0 {
            return SmallVec::new();
        }
        let Some(batch) = self.deck.draw(amount) else {
            return SmallVec::new();
        };
        self.table.place(&batch);
        batch
    }

    /// Handle a click on the table slot at `index`.
    ///
    /// The transition depends on how many cards were selected before
    /// the click:
    ///
    /// - **3 selected**: the pending trio is evaluated first. A match
    ///   flags all three `matched` and scores +4; a mismatch deselects
    ///   them and scores -2 (floored at zero). The clicked card then
    ///   starts a fresh selection. Clicking one of the three pending
    ///   cards themselves is ignored: a trio cannot lose a member
    ///   without being evaluated.
    /// - **0-2 selected**: any matched slots are cleared, a clear
    ///   triggers an automatic `deal(3)`, and the clicked card's
    ///   selection flag toggles.
    pub fn select_card(&mut self, index: usize) -> SelectOutcome {
        let Some(&card) = self.table.card(index) else {
            return if index < self.table.len() {
                SelectOutcome::Ignored(IgnoreReason::EmptySlot)
            } else {
                SelectOutcome::Ignored(IgnoreReason::OutOfBounds)
            };
        };
        if card.matched {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }

        // Pre-click selection, scanned before anything mutates.
        let selected = self.table.selected_indices();

        let mut toggled = card;
        toggled.toggle_selected();

        if selected.len() == 3 {
            if card.selected {
                return SelectOutcome::Ignored(IgnoreReason::PendingTrio);
            }
            self.resolve_trio(&selected);
            // The clicked card was not selected before, so the toggle
            // begins the next selection.
            self.table.put(index, toggled);
        } else {
            let cleared = self.table.clear_matched();
            if cleared > 0 {
                self.deal(DEAL_BATCH);
            }
            self.table.put(index, toggled);
        }

        SelectOutcome::Applied
    }

    /// Evaluate the three selected cards at `indices` and settle score,
    /// flags, and history.
    fn resolve_trio(&mut self, indices: &[usize]) {
        debug_assert_eq!(indices.len(), 3);

        let mut trio = [
            *self.table.card(indices[0]).expect("selected slot occupied"),
            *self.table.card(indices[1]).expect("selected slot occupied"),
            *self.table.card(indices[2]).expect("selected slot occupied"),
        ];

        if is_set(&trio[0], &trio[1], &trio[2]) {
            for card in &mut trio {
                card.matched = true;
                card.selected = false;
            }
            for (&index, &card) in indices.iter().zip(&trio) {
                self.table.put(index, card);
            }
            self.matched.push(Trio(trio));
            self.score.reward(MATCH_REWARD);
        } else {
            self.table.deselect_all();
            self.score.penalize(MISMATCH_PENALTY);
        }
    }

    /// Abandon the current game and start a fresh one.
    ///
    /// Regenerates and reshuffles the full deck (continuing this game's
    /// RNG stream), zeroes the score, and empties both the table and
    /// the match history. No cards are dealt; the caller repopulates
    /// the table.
    pub fn reset(&mut self) {
        self.deck = Deck::standard(&mut self.rng);
        self.table.clear();
        self.matched.clear();
        self.score.reset();
    }

    // === Checkpointing ===

    /// Capture the full game state for serialization.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            deck: self.deck.clone(),
            table: self.table.clone(),
            matched: self.matched.clone(),
            score: self.score,
            rng: self.rng.state(),
        }
    }

    /// Restore a game from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: GameSnapshot) -> Self {
        Self {
            deck: snapshot.deck,
            table: snapshot.table,
            matched: snapshot.matched,
            score: snapshot.score,
            rng: GameRng::from_state(&snapshot.rng),
        }
    }
}

/// Serializable capture of a whole game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub deck: Deck,
    pub table: Table,
    pub matched: Vec<Trio>,
    pub score: Score,
    pub rng: GameRngState,
}
