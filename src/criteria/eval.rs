//! Criteria evaluation.
//!
//! Evaluation is pure: it reads the hand being scored and, for relative
//! rules, the hands of every other player in the roster. Nothing is
//! mutated, so the same roster snapshot always produces the same score.
//!
//! The hand passed in may differ from the roster entry for the scoring
//! player: bot lookahead scores candidate hands against the live roster.

use super::{Comparison, Criteria, FULL_SET_POINTS, PARITY_EVEN_POINTS, PARITY_ODD_POINTS};
use crate::cards::{count_vegetable, count_vegetables_total, Card, Vegetable};
use crate::core::{Player, PlayerId};

impl Criteria {
    /// Score one rule for `player`'s `hand` against the full roster.
    ///
    /// `roster` contains every player including `player` (skipped by id
    /// when comparing). Ties on relative rules award full points to every
    /// tied player independently.
    #[must_use]
    pub fn evaluate(&self, hand: &[Card], player: PlayerId, roster: &[Player]) -> i32 {
        match *self {
            Criteria::RelativeTotal { comparison, points } => {
                let mine = count_vegetables_total(hand);
                if unbeaten(comparison, mine, player, roster, count_vegetables_total) {
                    points
                } else {
                    0
                }
            }

            Criteria::TypeThreshold { at_least, points } => {
                let kinds = Vegetable::ALL
                    .into_iter()
                    .filter(|&veg| count_vegetable(hand, veg) >= at_least)
                    .count();
                kinds as i32 * points
            }

            Criteria::MissingType { points } => {
                let missing = Vegetable::ALL
                    .into_iter()
                    .filter(|&veg| count_vegetable(hand, veg) == 0)
                    .count();
                missing as i32 * points
            }

            Criteria::FullSet => {
                let complete = Vegetable::ALL
                    .into_iter()
                    .all(|veg| count_vegetable(hand, veg) > 0);
                if complete {
                    FULL_SET_POINTS
                } else {
                    0
                }
            }

            Criteria::RelativeSingle {
                comparison,
                vegetable,
                points,
            } => {
                let mine = count_vegetable(hand, vegetable);
                let count = |h: &[Card]| count_vegetable(h, vegetable);
                if unbeaten(comparison, mine, player, roster, count) {
                    points
                } else {
                    0
                }
            }

            Criteria::MinOfEach {
                ref vegetables,
                points,
            } => {
                let min = vegetables
                    .iter()
                    .map(|&veg| count_vegetable(hand, veg))
                    .min()
                    .unwrap_or(0);
                min as i32 * points
            }

            Criteria::PerCopies {
                vegetable,
                copies,
                points,
            } => {
                let sets = count_vegetable(hand, vegetable) / copies;
                sets as i32 * points
            }

            Criteria::Parity { vegetable } => {
                if count_vegetable(hand, vegetable) % 2 == 0 {
                    PARITY_EVEN_POINTS
                } else {
                    PARITY_ODD_POINTS
                }
            }

            Criteria::PerVegetable { ref terms } => terms
                .iter()
                .map(|&(weight, veg)| weight * count_vegetable(hand, veg) as i32)
                .sum(),
        }
    }
}

/// Whether `mine` survives the comparison against every other player.
///
/// `Most`: no other player's count is strictly greater.
/// `Fewest`: no other player's count is strictly smaller.
fn unbeaten(
    comparison: Comparison,
    mine: usize,
    player: PlayerId,
    roster: &[Player],
    count: impl Fn(&[Card]) -> usize,
) -> bool {
    roster
        .iter()
        .filter(|p| p.id != player)
        .all(|p| match comparison {
            Comparison::Most => count(&p.hand) <= mine,
            Comparison::Fewest => count(&p.hand) >= mine,
        })
}
