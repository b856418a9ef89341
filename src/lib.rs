//! # salad-engine
//!
//! A card-drafting game engine in the "point salad" family: players draft
//! cards from a shared market of three piles and accumulate a hand whose
//! score comes from scoring-rule text printed on some of the drafted cards.
//!
//! ## Design Principles
//!
//! 1. **Parse once, evaluate many**: scoring-rule text is parsed into a
//!    typed [`Criteria`] AST when cards are built, so malformed rules are a
//!    load-time error instead of a mid-game crash.
//!
//! 2. **Absence is not an error**: exhausted piles and market slots return
//!    `None`. Caller contract violations (out-of-range indices) panic, and
//!    configuration problems (bad participant counts, bad rule text) return
//!    typed errors.
//!
//! 3. **The market reasons collectively**: a pile that runs dry borrows a
//!    card from its largest sibling, so any single pile can serve a
//!    point-card request while at least two cards remain anywhere in the
//!    draw stacks.
//!
//! ## Modules
//!
//! - `core`: player identity, game configuration, deterministic RNG
//! - `cards`: vegetable identity, two-sided cards, hand tallies
//! - `criteria`: scoring-rule parser and evaluator
//! - `market`: piles, cross-pile replenishment, deck setup
//! - `scoring`: per-hand score aggregation and winner resolution
//! - `game`: turn-handler seam, bot turn handler, text views

pub mod cards;
pub mod core;
pub mod criteria;
pub mod game;
pub mod market;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Player, PlayerId, SetupError};

pub use crate::cards::{count_vegetable, count_vegetables_total, Card, Side, Vegetable};

pub use crate::criteria::{Comparison, Criteria, CriteriaError, Rule};

pub use crate::market::{
    CardManifest, DeckBuilder, ManifestError, Market, Pile, PILE_COUNT, SLOTS_PER_PILE,
};

pub use crate::scoring::{resolve_winner, score_hand, score_roster, GameOutcome};

pub use crate::game::{BotTurnHandler, GameLoop, TurnHandler};
