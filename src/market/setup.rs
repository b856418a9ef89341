//! Deck construction: manifest loading, per-kind decks, the market deal.
//!
//! A manifest describes card faces only. How many of each card actually
//! enters play depends on the participant count: three cards of every
//! vegetable kind per participant, drawn from the top of each kind's
//! shuffled deck. The combined deck is shuffled again and dealt
//! round-robin into the three market piles.

use std::error::Error;
use std::fmt;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::market::{Market, PILE_COUNT};
use super::pile::Pile;
use crate::cards::{Card, Vegetable};
use crate::core::{GameConfig, GameRng};
use crate::criteria::{CriteriaError, Rule};

/// Cards of each vegetable kind dealt per participant.
pub const CARDS_PER_KIND_PER_PLAYER: usize = 3;

const STANDARD_MANIFEST: &str = include_str!("manifest.json");

/// Why a manifest could not be turned into a deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManifestError {
    /// The manifest was not valid JSON of the expected shape.
    Json { message: String },
    /// A card entry has no rule text for one of the six vegetables.
    MissingVegetable {
        card_index: usize,
        vegetable: Vegetable,
    },
    /// A rule text did not parse.
    Rule(CriteriaError),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Json { message } => {
                write!(f, "manifest is not valid JSON: {message}")
            }
            ManifestError::MissingVegetable {
                card_index,
                vegetable,
            } => write!(
                f,
                "manifest card {card_index} has no rule for {vegetable}"
            ),
            ManifestError::Rule(err) => write!(f, "manifest rule rejected: {err}"),
        }
    }
}

impl Error for ManifestError {}

impl From<CriteriaError> for ManifestError {
    fn from(err: CriteriaError) -> Self {
        ManifestError::Rule(err)
    }
}

/// A deserialized card manifest: one entry per physical card face set,
/// mapping each vegetable name to that card's rule text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardManifest {
    cards: Vec<ManifestCard>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ManifestCard {
    criteria: FxHashMap<String, String>,
}

impl CardManifest {
    /// Parse a manifest from its JSON text. Rule texts are not validated
    /// here; they are parsed when the deck is built.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(|err| ManifestError::Json {
            message: err.to_string(),
        })
    }

    /// The manifest bundled with the crate.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_json(STANDARD_MANIFEST).expect("bundled manifest is valid")
    }

    /// Number of card entries (each entry yields one card per vegetable).
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.cards.len()
    }
}

/// Builds a dealt market from a manifest and a validated configuration.
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    manifest: CardManifest,
}

impl DeckBuilder {
    #[must_use]
    pub fn new(manifest: CardManifest) -> Self {
        Self { manifest }
    }

    /// Builder over the bundled manifest.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(CardManifest::standard())
    }

    /// Shuffle, size, and deal the market for `config`.
    ///
    /// Sizing is three cards of each kind per participant, taken off the
    /// top of that kind's shuffled deck, so which faces enter play varies
    /// with the seed. The combined deck is shuffled once more and dealt
    /// round-robin into three piles; the first two cards of each pile
    /// become its face-up market slots.
    pub fn build_market(
        &self,
        config: &GameConfig,
        rng: &mut GameRng,
    ) -> Result<Market, ManifestError> {
        let mut decks = self.decks(rng)?;
        let per_kind = config.participant_count() * CARDS_PER_KIND_PER_PLAYER;

        let mut combined: Vec<Card> = Vec::with_capacity(per_kind * Vegetable::COUNT);
        for _ in 0..per_kind {
            for veg in Vegetable::ALL {
                if let Some(card) = decks.get_mut(&veg).and_then(Vec::pop) {
                    combined.push(card);
                }
            }
        }
        rng.shuffle(&mut combined);

        let mut split: Vec<Vector<Card>> = vec![Vector::new(); PILE_COUNT];
        for (i, card) in combined.into_iter().enumerate() {
            split[i % PILE_COUNT].push_back(card);
        }
        Ok(Market::new(split.into_iter().map(Pile::new).collect()))
    }

    /// One shuffled deck per vegetable kind, every rule parsed up front.
    fn decks(
        &self,
        rng: &mut GameRng,
    ) -> Result<FxHashMap<Vegetable, Vec<Card>>, ManifestError> {
        let mut decks: FxHashMap<Vegetable, Vec<Card>> = FxHashMap::default();
        for (index, entry) in self.manifest.cards.iter().enumerate() {
            for veg in Vegetable::ALL {
                let text = entry.criteria.get(veg.name()).ok_or(
                    ManifestError::MissingVegetable {
                        card_index: index,
                        vegetable: veg,
                    },
                )?;
                let rule = Rule::parse(text.clone())?;
                decks.entry(veg).or_default().push(Card::new(veg, rule));
            }
        }
        for deck in decks.values_mut() {
            rng.shuffle(deck);
        }
        Ok(decks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::SLOTS_PER_PILE;

    fn config(participants: usize) -> GameConfig {
        GameConfig::new(participants, 0).unwrap()
    }

    #[test]
    fn test_bundled_manifest_parses() {
        let manifest = CardManifest::standard();
        assert_eq!(manifest.entry_count(), 18);

        // Every rule text must survive the criteria parser.
        let mut rng = GameRng::new(0);
        DeckBuilder::new(manifest).decks(&mut rng).unwrap();
    }

    #[test]
    fn test_market_size_scales_with_participants() {
        let builder = DeckBuilder::standard();
        for participants in 2..=6 {
            let mut rng = GameRng::new(7);
            let market = builder.build_market(&config(participants), &mut rng).unwrap();
            // 6 kinds, 3 per kind per participant.
            assert_eq!(market.total_cards(), participants * 18);
        }
    }

    #[test]
    fn test_deal_is_round_robin_even() {
        let mut rng = GameRng::new(3);
        let market = DeckBuilder::standard()
            .build_market(&config(4), &mut rng)
            .unwrap();
        // 72 cards split three ways: 24 per pile, 2 in slots.
        for i in 0..PILE_COUNT {
            let pile = market.pile(i);
            assert_eq!(pile.card_count(), 24);
            assert_eq!(pile.draw_len(), 24 - SLOTS_PER_PILE);
            for slot in 0..SLOTS_PER_PILE {
                assert!(!pile.slot(slot).unwrap().is_criteria_up());
            }
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let builder = DeckBuilder::standard();
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let first = builder.build_market(&config(3), &mut a).unwrap();
        let second = builder.build_market(&config(3), &mut b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_vegetable_rejected() {
        let json = r#"{"cards":[{"criteria":{"PEPPER":"2 / PEPPER"}}]}"#;
        let manifest = CardManifest::from_json(json).unwrap();
        let mut rng = GameRng::new(0);
        let err = DeckBuilder::new(manifest)
            .build_market(&config(2), &mut rng)
            .unwrap_err();
        assert!(matches!(err, ManifestError::MissingVegetable { card_index: 0, .. }));
    }

    #[test]
    fn test_bad_rule_text_rejected() {
        let json = r#"{"cards":[{"criteria":{
            "PEPPER":"gibberish","LETTUCE":"2 / LETTUCE","CARROT":"2 / CARROT",
            "CABBAGE":"2 / CABBAGE","ONION":"2 / ONION","TOMATO":"2 / TOMATO"}}]}"#;
        let manifest = CardManifest::from_json(json).unwrap();
        let mut rng = GameRng::new(0);
        let err = DeckBuilder::new(manifest)
            .build_market(&config(2), &mut rng)
            .unwrap_err();
        assert!(matches!(err, ManifestError::Rule(_)));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = CardManifest::from_json("{not json").unwrap_err();
        assert!(matches!(err, ManifestError::Json { .. }));
    }
}
