//! Stateless hand tallies.
//!
//! Counting vegetables is a pure function of the card sequence; both the
//! criteria evaluator and the text views call these.
//!
//! Only vegetable-side-up cards count. A criteria-up card does not tally as
//! its printed vegetable until it is flipped.

use super::card::Card;
use super::vegetable::Vegetable;

/// Count vegetable-side-up cards of one kind.
#[must_use]
pub fn count_vegetable(hand: &[Card], vegetable: Vegetable) -> usize {
    hand.iter()
        .filter(|card| !card.is_criteria_up() && card.vegetable() == vegetable)
        .count()
}

/// Count vegetable-side-up cards of any kind.
#[must_use]
pub fn count_vegetables_total(hand: &[Card]) -> usize {
    hand.iter().filter(|card| !card.is_criteria_up()).count()
}
