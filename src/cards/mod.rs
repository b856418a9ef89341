//! Cards: vegetable identity, two-sided cards, and hand tallies.

pub mod card;
pub mod tally;
pub mod vegetable;

pub use card::{Card, Side};
pub use tally::{count_vegetable, count_vegetables_total};
pub use vegetable::Vegetable;
