//! # set-engine
//!
//! The rules engine for the pattern-matching card game Set.
//!
//! The crate owns the full 81-card universe, the table of visible
//! slots, the selection/match state machine, and scoring. Rendering,
//! animation, and input mapping live entirely outside: a presentation
//! layer reads state through the observers and drives play through
//! three operations.
//!
//! ## Design Principles
//!
//! 1. **Flags are the only selection state**: which cards are selected
//!    is derived by scanning the table, never cached in a counter that
//!    could drift.
//!
//! 2. **All-or-nothing operations**: an illegal click or an
//!    unfulfillable deal changes nothing and reports why via
//!    `SelectOutcome` rather than an error.
//!
//! 3. **Deterministic dealing**: the deck is shuffled once per game by
//!    a seeded RNG, so every deal order is reproducible from the seed.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG, zero-floored score
//! - `cards`: feature axes, combinations, cards
//! - `deck`: cartesian-product deck generation and drawing
//! - `table`: slot sequence, placement, clearing
//! - `game`: the selection/match state machine and scoring rules
//!
//! ## Example
//!
//! ```
//! use set_engine::SetGame;
//!
//! let mut game = SetGame::new(42);
//! game.deal(12);
//!
//! assert_eq!(game.deck().len(), 69);
//! assert_eq!(game.table().occupied_count(), 12);
//!
//! // Clicks toggle selection; the third selection arms a trio that is
//! // evaluated on the next click.
//! game.select_card(0);
//! assert!(game.table().card(0).unwrap().selected);
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod game;
pub mod table;

// Re-export commonly used types
pub use crate::cards::{Card, Color, Combination, Number, Shading, Symbol};

pub use crate::core::{GameRng, GameRngState, Score, MATCH_REWARD, MISMATCH_PENALTY};

pub use crate::deck::{Deck, DECK_SIZE};

pub use crate::table::{Slot, Table};

pub use crate::game::{
    is_set, GameSnapshot, IgnoreReason, SelectOutcome, SetGame, Trio, DEAL_BATCH,
};
