//! Core engine types: deterministic RNG and scoring.

pub mod rng;
pub mod score;

pub use rng::{GameRng, GameRngState};
pub use score::{Score, MATCH_REWARD, MISMATCH_PENALTY};
