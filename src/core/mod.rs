//! Core types: player identity and data, game configuration, RNG.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, SetupError, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
