//! The shared market: three piles, cross-pile replenishment, deck setup.

pub mod market;
pub mod pile;
pub mod setup;

pub use market::{Market, PILE_COUNT};
pub use pile::{Pile, SLOTS_PER_PILE};
pub use setup::{CardManifest, DeckBuilder, ManifestError};
