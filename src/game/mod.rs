//! The game loop and the turn seam.
//!
//! The loop owns the market, the roster, and the RNG. Who decides each
//! turn is behind [`TurnHandler`]: a bot, a human front end, or a test
//! script all plug in the same way. The loop itself only sequences seats
//! and detects exhaustion.

pub mod bot;
pub mod view;

pub use bot::BotTurnHandler;
pub use view::{market_choice, render_hand, render_market};

use crate::core::{GameConfig, GameRng, Player, PlayerId};
use crate::market::{DeckBuilder, ManifestError, Market};
use crate::scoring::{score_roster, GameOutcome};

/// Decides one player's turn.
///
/// A turn must take at least one card whenever the market still has any;
/// a handler that takes nothing while cards remain stalls the game.
pub trait TurnHandler {
    /// Act for the player at `seat` in roster order. The handler mutates
    /// the market (buying cards) and the seat's roster entry (growing its
    /// hand, optionally flipping criteria cards already held).
    fn take_turn(&mut self, market: &mut Market, seat: usize, roster: &mut [Player]);
}

/// One full game: dealt market, seated players, seeded RNG.
#[derive(Clone, Debug)]
pub struct GameLoop {
    market: Market,
    roster: Vec<Player>,
    rng: GameRng,
}

impl GameLoop {
    /// Deal a game for `config` from `builder`'s manifest.
    ///
    /// # Errors
    ///
    /// Returns a [`ManifestError`] if the manifest cannot produce a deck.
    pub fn new(config: &GameConfig, builder: &DeckBuilder) -> Result<Self, ManifestError> {
        let mut rng = GameRng::new(config.seed);
        let market = builder.build_market(config, &mut rng)?;
        let roster = PlayerId::all(config.participant_count())
            .map(Player::new)
            .collect();
        Ok(Self {
            market,
            roster,
            rng,
        })
    }

    /// The live market.
    #[must_use]
    pub fn market(&self) -> &Market {
        &self.market
    }

    /// The seated players, in turn order.
    #[must_use]
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Play until the market is exhausted, then score and resolve.
    ///
    /// The starting seat is drawn from the game RNG; play proceeds in
    /// roster order, wrapping around, one handler call per turn.
    pub fn run(&mut self, handler: &mut dyn TurnHandler) -> GameOutcome {
        let mut seat = self.rng.gen_range_usize(0..self.roster.len());
        while !self.market.is_exhausted() {
            handler.take_turn(&mut self.market, seat, &mut self.roster);
            seat = (seat + 1) % self.roster.len();
        }
        score_roster(&mut self.roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{PILE_COUNT, SLOTS_PER_PILE};

    /// Takes the first available card, point cards before slots.
    struct FirstAvailable;

    impl TurnHandler for FirstAvailable {
        fn take_turn(&mut self, market: &mut Market, seat: usize, roster: &mut [Player]) {
            for pile in 0..PILE_COUNT {
                if let Some(card) = market.buy_point_card(pile) {
                    roster[seat].hand.push(card);
                    return;
                }
            }
            for pile in 0..PILE_COUNT {
                for slot in 0..SLOTS_PER_PILE {
                    if let Some(card) = market.buy_veggie_card(pile, slot) {
                        roster[seat].hand.push(card);
                        return;
                    }
                }
            }
        }
    }

    #[test]
    fn test_run_drains_market_and_scores() {
        let config = GameConfig::new(0, 3).unwrap().with_seed(11);
        let mut game = GameLoop::new(&config, &DeckBuilder::standard()).unwrap();
        let dealt = game.market().total_cards();
        assert_eq!(dealt, 3 * 18);

        let outcome = game.run(&mut FirstAvailable);

        assert!(game.market().is_exhausted());
        let in_hands: usize = game.roster().iter().map(|p| p.hand.len()).sum();
        assert_eq!(in_hands, dealt);
        assert_eq!(outcome.scores.len(), 3);
        assert!(outcome.scores.iter().any(|&(id, _)| id == outcome.winner));
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let config = GameConfig::new(0, 4).unwrap().with_seed(99);
        let builder = DeckBuilder::standard();

        let first = GameLoop::new(&config, &builder).unwrap().run(&mut FirstAvailable);
        let second = GameLoop::new(&config, &builder).unwrap().run(&mut FirstAvailable);
        assert_eq!(first, second);
    }
}
