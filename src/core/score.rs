//! Player score with a zero floor.
//!
//! The score only changes through the two mutators here, so the
//! never-negative invariant lives in one place. A mismatch penalty that
//! would take the score below zero clamps to zero instead; rewards are
//! uncapped.

use serde::{Deserialize, Serialize};

/// Points awarded for resolving a matched trio.
pub const MATCH_REWARD: u32 = 4;

/// Points deducted for a failed trio, floored at zero.
pub const MISMATCH_PENALTY: u32 = 2;

/// A non-negative score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    /// A fresh zero score.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Add points.
    pub fn reward(&mut self, points: u32) {
        self.0 += points;
    }

    /// Subtract points, clamping at zero.
    pub fn penalize(&mut self, points: u32) {
        self.0 = self.0.saturating_sub(points);
    }

    /// Reset to zero.
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}
