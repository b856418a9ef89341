//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Player indices are 0-based.
//!
//! ## Player
//!
//! A player is plain data: identity, drafted hand, final score. Whether a
//! player is driven by a human, a bot, or a remote connection is decided by
//! the turn layer (see [`crate::game::TurnHandler`]); the core never needs
//! to know.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Player identifier supporting up to 255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use salad_engine::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in the game: identity, drafted hand, score.
///
/// The score starts at 0 and is written once by the result handling at game
/// end; everything score-related is derived from the hand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier within one game.
    pub id: PlayerId,

    /// Drafted cards, criteria-side-up and vegetable-side-up mixed.
    pub hand: Vec<Card>,

    /// Final score, filled in by result handling.
    pub score: i32,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::new(),
            score: 0,
        }
    }

    /// Whether the player holds any criteria-side-up card.
    #[must_use]
    pub fn has_criteria_card(&self) -> bool {
        self.hand.iter().any(Card::is_criteria_up)
    }
}
