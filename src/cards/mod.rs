//! Card identity model.
//!
//! ## Key Types
//!
//! - `Number`/`Color`/`Symbol`/`Shading`: the four feature axes
//! - `Combination`: one value per axis, the identity of a card
//! - `Card`: a combination plus the `selected`/`matched` flags

pub mod card;
pub mod features;

pub use card::{Card, Combination};
pub use features::{Color, Number, Shading, Symbol, VALUES_PER_AXIS};
