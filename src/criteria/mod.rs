//! Scoring-rule interpreter.
//!
//! Rule text like `MOST LETTUCE = 10` or `2 / CARROT` is parsed once, when
//! cards are built, into a [`Criteria`] AST; scoring evaluates the AST
//! against a hand and the roster of all players. Malformed rule text is a
//! load-time [`CriteriaError`] naming the offending rule, never a mid-game
//! failure.
//!
//! ## Classification
//!
//! Each rule is classified into exactly one variant by keyword presence,
//! checked in a fixed priority so a single rule never double-matches:
//!
//! 1. `TOTAL`: relative total-vegetable comparison
//! 2. `TYPE`: per-kind threshold (or `MISSING`-kind count)
//! 3. `SET`: one of every kind
//! 4. `MOST` / `FEWEST`: relative single-vegetable comparison
//! 5. `+`: weighted sum over distinct kinds, or per-K-copies
//! 6. `EVEN` / `ODD`: parity bonus
//! 7. `/`: points per vegetable, comma-separated pairs

pub mod eval;
pub mod parse;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Vegetable;

/// Points awarded by a `SET` rule when the hand holds every kind.
pub const FULL_SET_POINTS: i32 = 12;

/// Points awarded by a parity rule for an even count.
///
/// Parity payouts are fixed at 7 for even and 3 for odd; the numbers in
/// the rule text are display only.
pub const PARITY_EVEN_POINTS: i32 = 7;

/// Points awarded by a parity rule for an odd count.
pub const PARITY_ODD_POINTS: i32 = 3;

/// Direction of a relative (`MOST`/`FEWEST`) comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    /// Award if no other player has strictly more.
    Most,
    /// Award if no other player has strictly fewer.
    Fewest,
}

/// A parsed scoring rule.
///
/// One variant per rule family; operands are already typed, so evaluation
/// never touches the original text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criteria {
    /// `MOST TOTAL VEGETABLE = 10`: fixed points if this player's total
    /// vegetable count ties-or-beats (or, for `FEWEST`, ties-or-is-below)
    /// every other player's total.
    RelativeTotal { comparison: Comparison, points: i32 },

    /// `5 / VEGETABLE TYPE >=3`: points for every kind with at least
    /// `at_least` cards in hand.
    TypeThreshold { at_least: usize, points: i32 },

    /// `5 / MISSING VEGETABLE TYPE`: points for every kind with zero cards
    /// in hand.
    MissingType { points: i32 },

    /// `COMPLETE SET = 12`: [`FULL_SET_POINTS`] if the hand holds at least
    /// one card of every kind.
    FullSet,

    /// `MOST LETTUCE = 10` / `FEWEST CARROT = 7`: fixed points if this
    /// player's count of one vegetable survives the comparison against
    /// every other player. Ties award full points to every tied player.
    RelativeSingle {
        comparison: Comparison,
        vegetable: Vegetable,
        points: i32,
    },

    /// `TOMATO + LETTUCE + CARROT = 8` with distinct kinds: points times
    /// the minimum of the per-kind counts.
    MinOfEach {
        vegetables: SmallVec<[Vegetable; 3]>,
        points: i32,
    },

    /// `PEPPER + PEPPER + PEPPER = 9` (duplicate-plus form): points for
    /// every `copies` cards of the named vegetable.
    PerCopies {
        vegetable: Vegetable,
        copies: usize,
        points: i32,
    },

    /// `LETTUCE: EVEN=7, ODD=3`: [`PARITY_EVEN_POINTS`] if the named
    /// vegetable's count is even, else [`PARITY_ODD_POINTS`].
    Parity { vegetable: Vegetable },

    /// `2 / LETTUCE` or `1 / ONION, 1 / TOMATO`: sum of weight times count
    /// over each pair.
    PerVegetable {
        terms: SmallVec<[(i32, Vegetable); 3]>,
    },
}

/// A scoring rule together with the text it was parsed from.
///
/// The text is kept verbatim for display; evaluation only ever reads the
/// parsed [`Criteria`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    text: String,
    criteria: Criteria,
}

impl Rule {
    /// Parse rule text.
    ///
    /// # Errors
    ///
    /// Returns a [`CriteriaError`] identifying the offending rule when the
    /// text matches no rule family, names an unknown vegetable, or carries
    /// a missing/malformed number.
    pub fn parse(text: impl Into<String>) -> Result<Self, CriteriaError> {
        let text = text.into();
        let criteria = parse::parse(&text)?;
        Ok(Self { text, criteria })
    }

    /// The original rule text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The parsed form.
    #[must_use]
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }
}

impl std::str::FromStr for Rule {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse(s)
    }
}

/// Malformed scoring-rule text, detected when cards are built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CriteriaError {
    /// A token where a vegetable name was expected is not one of the six
    /// kinds.
    UnknownVegetable { rule: String, token: String },
    /// A token where an integer was expected did not parse.
    InvalidNumber { rule: String, token: String },
    /// The rule family requires a point value and none was found.
    MissingPoints { rule: String },
    /// The text matches no rule family.
    UnrecognizedRule { rule: String },
}

impl CriteriaError {
    /// The offending rule text.
    #[must_use]
    pub fn rule(&self) -> &str {
        match self {
            CriteriaError::UnknownVegetable { rule, .. }
            | CriteriaError::InvalidNumber { rule, .. }
            | CriteriaError::MissingPoints { rule }
            | CriteriaError::UnrecognizedRule { rule } => rule,
        }
    }
}

impl std::fmt::Display for CriteriaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CriteriaError::UnknownVegetable { rule, token } => {
                write!(f, "unknown vegetable {token:?} in rule {rule:?}")
            }
            CriteriaError::InvalidNumber { rule, token } => {
                write!(f, "invalid number {token:?} in rule {rule:?}")
            }
            CriteriaError::MissingPoints { rule } => {
                write!(f, "missing point value in rule {rule:?}")
            }
            CriteriaError::UnrecognizedRule { rule } => {
                write!(f, "unrecognized rule {rule:?}")
            }
        }
    }
}

impl std::error::Error for CriteriaError {}
