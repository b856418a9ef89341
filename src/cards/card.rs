//! Two-sided cards.
//!
//! Every card has a vegetable printed on one side and (usually) a scoring
//! rule on the other. Which side faces up decides what the card *is* right
//! now: a criteria-up card contributes to rule evaluation, a vegetable-up
//! card contributes to vegetable tallies, never both.
//!
//! The flip is one-way. A card dealt criteria-up may be turned to its
//! vegetable side (at most once per turn, enforced by the turn layer) and
//! never turns back.

use serde::{Deserialize, Serialize};

use super::vegetable::Vegetable;
use crate::criteria::{Criteria, Rule};

/// Which face of a card is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Scoring rule showing; counts toward rule evaluation.
    Criteria,
    /// Vegetable showing; counts toward vegetable tallies.
    Vegetable,
}

/// A game card: fixed vegetable identity, optional scoring rule, mutable
/// face orientation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    vegetable: Vegetable,
    rule: Option<Rule>,
    side: Side,
}

impl Card {
    /// Create a card carrying a scoring rule, criteria-side-up as when
    /// freshly dealt from a draw pile.
    #[must_use]
    pub fn new(vegetable: Vegetable, rule: Rule) -> Self {
        Self {
            vegetable,
            rule: Some(rule),
            side: Side::Criteria,
        }
    }

    /// Create a blank vegetable-only card, vegetable-side-up.
    #[must_use]
    pub fn vegetable_only(vegetable: Vegetable) -> Self {
        Self {
            vegetable,
            rule: None,
            side: Side::Vegetable,
        }
    }

    /// The vegetable printed on this card.
    #[must_use]
    pub fn vegetable(&self) -> Vegetable {
        self.vegetable
    }

    /// Which side is up.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Whether the scoring rule is showing.
    #[must_use]
    pub fn is_criteria_up(&self) -> bool {
        self.side == Side::Criteria
    }

    /// The parsed scoring rule, regardless of orientation.
    #[must_use]
    pub fn criteria(&self) -> Option<&Criteria> {
        self.rule.as_ref().map(Rule::criteria)
    }

    /// The raw rule text, regardless of orientation.
    #[must_use]
    pub fn rule_text(&self) -> Option<&str> {
        self.rule.as_ref().map(Rule::text)
    }

    /// Turn the card vegetable-side-up. There is no inverse.
    pub fn flip_to_vegetable(&mut self) {
        self.side = Side::Vegetable;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.rule, self.side) {
            (Some(rule), Side::Criteria) => write!(f, "{} ({})", rule.text(), self.vegetable),
            _ => write!(f, "{}", self.vegetable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(text: &str) -> Rule {
        Rule::parse(text).unwrap()
    }

    #[test]
    fn test_dealt_criteria_up() {
        let card = Card::new(Vegetable::Lettuce, rule("MOST LETTUCE = 10"));
        assert!(card.is_criteria_up());
        assert_eq!(card.vegetable(), Vegetable::Lettuce);
        assert_eq!(card.rule_text(), Some("MOST LETTUCE = 10"));
        assert!(card.criteria().is_some());
    }

    #[test]
    fn test_blank_card_is_vegetable_up() {
        let card = Card::vegetable_only(Vegetable::Onion);
        assert!(!card.is_criteria_up());
        assert_eq!(card.side(), Side::Vegetable);
        assert_eq!(card.rule_text(), None);
        assert_eq!(card.criteria(), None);
    }

    #[test]
    fn test_flip_is_one_way() {
        let mut card = Card::new(Vegetable::Tomato, rule("2 / TOMATO"));
        card.flip_to_vegetable();
        assert_eq!(card.side(), Side::Vegetable);

        // Flipping again changes nothing; no API turns it back.
        card.flip_to_vegetable();
        assert_eq!(card.side(), Side::Vegetable);

        // The rule is still on the card, just not showing.
        assert!(card.criteria().is_some());
    }

    #[test]
    fn test_display_follows_side() {
        let mut card = Card::new(Vegetable::Carrot, rule("2 / CARROT"));
        assert_eq!(format!("{card}"), "2 / CARROT (CARROT)");

        card.flip_to_vegetable();
        assert_eq!(format!("{card}"), "CARROT");
    }

    #[test]
    fn test_serialization_round_trip() {
        let card = Card::new(Vegetable::Pepper, rule("PEPPER + PEPPER = 5"));
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
