//! The match predicate and resolved-trio record.
//!
//! Three cards form a Set when, on every axis independently, their
//! values are either all equal or all pairwise distinct. An axis with
//! exactly two equal values disqualifies the trio. The check is
//! symmetric: the order of the three cards never matters.

use std::hash::Hash;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A resolved trio, recorded in the match history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trio(pub [Card; 3]);

impl Trio {
    /// The three cards, in the order they sat on the table.
    #[must_use]
    pub fn cards(&self) -> &[Card; 3] {
        &self.0
    }
}

/// Check whether three cards form a Set.
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    let (a, b, c) = (a.combination(), b.combination(), c.combination());

    axis_admissible(a.number, b.number, c.number)
        && axis_admissible(a.color, b.color, c.color)
        && axis_admissible(a.symbol, b.symbol, c.symbol)
        && axis_admissible(a.shading, b.shading, c.shading)
}

/// One axis passes when its distinct-value count is 1 or 3.
///
/// A set's uniqueness constraint gives the count directly: collect the
/// three values and look at how many survived.
fn axis_admissible<T: Eq + Hash>(a: T, b: T, c: T) -> bool {
    let distinct: FxHashSet<T> = [a, b, c].into_iter().collect();
    distinct.len() != 2
}
