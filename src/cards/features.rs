//! The four feature axes of a Set card.
//!
//! A card is identified by one value on each of four independent axes:
//! number, color, symbol, and shading. Every axis has exactly three
//! values, so the full card universe has 3^4 = 81 identities.
//!
//! Each axis exposes a `const ALL` table in a fixed order. The deck
//! generator iterates these tables; nothing else may depend on that
//! order.

use serde::{Deserialize, Serialize};

/// Number of values on every axis.
pub const VALUES_PER_AXIS: usize = 3;

/// How many symbols are drawn on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    One,
    Two,
    Three,
}

impl Number {
    /// All values in deck-generation order.
    pub const ALL: [Number; VALUES_PER_AXIS] = [Number::One, Number::Two, Number::Three];
}

/// Color of the card's symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// All values in deck-generation order.
    pub const ALL: [Color; VALUES_PER_AXIS] = [Color::Red, Color::Green, Color::Blue];
}

/// Shape of the card's symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Oval,
    Squiggle,
    Diamond,
}

impl Symbol {
    /// All values in deck-generation order.
    pub const ALL: [Symbol; VALUES_PER_AXIS] = [Symbol::Oval, Symbol::Squiggle, Symbol::Diamond];
}

/// Fill style of the card's symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

impl Shading {
    /// All values in deck-generation order.
    pub const ALL: [Shading; VALUES_PER_AXIS] = [Shading::Solid, Shading::Striped, Shading::Open];
}
