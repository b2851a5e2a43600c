//! Selection/match engine.
//!
//! ## Key Types
//!
//! - `SetGame`: the playable game, driven by `select_card`/`deal`/`reset`
//! - `SelectOutcome`/`IgnoreReason`: what a click did, or why it didn't
//! - `is_set`/`Trio`: the match predicate and the history record

pub mod engine;
pub mod matcher;

pub use engine::{GameSnapshot, IgnoreReason, SelectOutcome, SetGame, DEAL_BATCH};
pub use matcher::{is_set, Trio};
