//! Game configuration and setup validation.
//!
//! A [`GameConfig`] is validated at construction, before any market or
//! deck exists: participant counts outside the supported range are a setup
//! error, not a runtime surprise.

use serde::{Deserialize, Serialize};

/// Minimum total participants (humans + bots).
pub const MIN_PARTICIPANTS: usize = 2;

/// Maximum total participants (humans + bots).
pub const MAX_PARTICIPANTS: usize = 6;

/// Invalid game setup, detected before any game state is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// Fewer than [`MIN_PARTICIPANTS`] total participants.
    TooFewParticipants { requested: usize },
    /// More than [`MAX_PARTICIPANTS`] total participants.
    TooManyParticipants { requested: usize },
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::TooFewParticipants { requested } => write!(
                f,
                "too few participants: {requested} (minimum {MIN_PARTICIPANTS})"
            ),
            SetupError::TooManyParticipants { requested } => write!(
                f,
                "too many participants: {requested} (maximum {MAX_PARTICIPANTS})"
            ),
        }
    }
}

impl std::error::Error for SetupError {}

/// Validated game configuration.
///
/// ## Example
///
/// ```
/// use salad_engine::GameConfig;
///
/// let config = GameConfig::new(1, 2).unwrap().with_seed(42);
/// assert_eq!(config.participant_count(), 3);
///
/// assert!(GameConfig::new(1, 0).is_err());
/// assert!(GameConfig::new(4, 3).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of human participants.
    pub humans: usize,

    /// Number of bot participants.
    pub bots: usize,

    /// Seed for deck shuffling and bot choice. Same seed, same game.
    pub seed: u64,
}

impl GameConfig {
    /// Create a configuration, validating the participant count.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if `humans + bots` is outside
    /// [`MIN_PARTICIPANTS`]..=[`MAX_PARTICIPANTS`].
    pub fn new(humans: usize, bots: usize) -> Result<Self, SetupError> {
        let total = humans + bots;
        if total < MIN_PARTICIPANTS {
            return Err(SetupError::TooFewParticipants { requested: total });
        }
        if total > MAX_PARTICIPANTS {
            return Err(SetupError::TooManyParticipants { requested: total });
        }

        Ok(Self {
            humans,
            bots,
            seed: 0,
        })
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total number of participants.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.humans + self.bots
    }
}
