//! A simple bot turn handler.
//!
//! The bot flips a coin between going for a point card or for vegetable
//! slots. Point cards are picked greedily: every pile's upcoming card is
//! scored against the bot's current hand and the best strictly positive
//! gain wins. When nothing scores, the bot still takes the first card it
//! can reach, so an all-bot game always drains the market.

use super::TurnHandler;
use crate::core::{GameRng, Player};
use crate::market::{Market, PILE_COUNT, SLOTS_PER_PILE};
use crate::scoring::score_hand;

/// Vegetable cards a bot takes in one slot turn.
const VEGGIES_PER_TURN: usize = 2;

/// Coin-flip bot with greedy point-card selection.
///
/// Carries its own RNG so bot behavior replays independently of the deal.
#[derive(Clone, Debug)]
pub struct BotTurnHandler {
    rng: GameRng,
}

impl BotTurnHandler {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Buy the point card with the best strictly positive score gain, or
    /// failing that the first available one. Returns false only when no
    /// pile can produce a point card.
    fn take_point_card(&mut self, market: &mut Market, seat: usize, roster: &mut [Player]) -> bool {
        let me = &roster[seat];
        let mut best: Option<(usize, i32)> = None;
        for pile in 0..PILE_COUNT {
            if let Some(card) = market.next_point_card(pile) {
                let mut candidate = me.hand.clone();
                candidate.push(card.clone());
                let total = score_hand(&candidate, me.id, roster);
                if best.map_or(total > 0, |(_, b)| total > b) {
                    best = Some((pile, total));
                }
            }
        }

        // Nothing scores: settle for any pile that still has a card.
        let pile = best.map(|(pile, _)| pile).or_else(|| {
            (0..PILE_COUNT).find(|&pile| market.next_point_card(pile).is_some())
        });

        if let Some(pile) = pile {
            if let Some(card) = market.buy_point_card(pile) {
                roster[seat].hand.push(card);
                return true;
            }
        }
        false
    }

    /// Take up to two vegetable cards, scanning slots in pile order.
    /// Returns false when every slot is empty.
    fn take_veggie_cards(&mut self, market: &mut Market, seat: usize, roster: &mut [Player]) -> bool {
        let mut taken = 0;
        for pile in 0..PILE_COUNT {
            for slot in 0..SLOTS_PER_PILE {
                if taken == VEGGIES_PER_TURN {
                    return true;
                }
                if let Some(card) = market.buy_veggie_card(pile, slot) {
                    roster[seat].hand.push(card);
                    taken += 1;
                }
            }
        }
        taken > 0
    }
}

impl TurnHandler for BotTurnHandler {
    fn take_turn(&mut self, market: &mut Market, seat: usize, roster: &mut [Player]) {
        if self.rng.gen_bool(0.5) {
            let _ = self.take_point_card(market, seat, roster)
                || self.take_veggie_cards(market, seat, roster);
        } else {
            let _ = self.take_veggie_cards(market, seat, roster)
                || self.take_point_card(market, seat, roster);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Vegetable};
    use crate::core::PlayerId;
    use crate::criteria::Rule;
    use crate::market::Pile;
    use im::Vector;

    fn point_card(text: &str, veg: Vegetable) -> Card {
        Card::new(veg, Rule::parse(text).unwrap())
    }

    fn roster(n: u8) -> Vec<Player> {
        PlayerId::all(n as usize).map(Player::new).collect()
    }

    /// Market whose piles hold exactly the given cards, in order.
    fn market_of(piles: [Vec<Card>; PILE_COUNT]) -> Market {
        Market::new(
            piles
                .into_iter()
                .map(|cards| Pile::new(Vector::from(cards)))
                .collect(),
        )
    }

    #[test]
    fn test_greedy_point_pick_prefers_best_gain() {
        // Three piles, no slot cards (piles dealt exactly 2 would put them
        // in slots; deal 3 so index 2 is the draw card).
        let filler = || point_card("1 / ONION", Vegetable::Onion);
        let mut market = market_of([
            vec![filler(), filler(), point_card("1 / CARROT", Vegetable::Carrot)],
            vec![filler(), filler(), point_card("2 / CARROT", Vegetable::Carrot)],
            vec![filler(), filler(), point_card("1 / ONION", Vegetable::Onion)],
        ]);
        let mut roster = roster(2);
        roster[0].hand = vec![
            Card::vegetable_only(Vegetable::Carrot),
            Card::vegetable_only(Vegetable::Carrot),
        ];

        let mut bot = BotTurnHandler::new(0);
        assert!(bot.take_point_card(&mut market, 0, &mut roster));

        // 2 / CARROT against two carrots beats 1 / CARROT.
        let picked = roster[0].hand.last().unwrap();
        assert_eq!(picked.rule_text(), Some("2 / CARROT"));
    }

    #[test]
    fn test_point_fallback_when_nothing_scores() {
        // Hand is empty, every candidate scores 0; the bot must still buy.
        let mut market = market_of([
            vec![
                point_card("2 / CARROT", Vegetable::Carrot),
                point_card("2 / CARROT", Vegetable::Carrot),
                point_card("2 / CARROT", Vegetable::Carrot),
            ],
            vec![],
            vec![],
        ]);
        let mut roster = roster(2);

        let mut bot = BotTurnHandler::new(0);
        assert!(bot.take_point_card(&mut market, 0, &mut roster));
        assert_eq!(roster[0].hand.len(), 1);
    }

    #[test]
    fn test_point_pick_fails_only_when_market_dry() {
        // Slots hold the only cards left; no draw stack, no donor.
        let mut market = market_of([
            vec![point_card("2 / CARROT", Vegetable::Carrot)],
            vec![],
            vec![],
        ]);
        let mut roster = roster(2);

        let mut bot = BotTurnHandler::new(0);
        assert!(!bot.take_point_card(&mut market, 0, &mut roster));
        // The slot path still works.
        assert!(bot.take_veggie_cards(&mut market, 0, &mut roster));
        assert_eq!(roster[0].hand.len(), 1);
    }

    #[test]
    fn test_veggie_turn_takes_at_most_two() {
        let filler = || point_card("1 / ONION", Vegetable::Onion);
        let mut market = market_of([
            vec![filler(), filler(), filler()],
            vec![filler(), filler(), filler()],
            vec![filler(), filler(), filler()],
        ]);
        let mut roster = roster(2);

        let mut bot = BotTurnHandler::new(0);
        assert!(bot.take_veggie_cards(&mut market, 0, &mut roster));
        assert_eq!(roster[0].hand.len(), 2);
        assert!(roster[0].hand.iter().all(|c| !c.is_criteria_up()));
    }

    #[test]
    fn test_bots_only_game_terminates() {
        use crate::core::GameConfig;
        use crate::game::GameLoop;
        use crate::market::DeckBuilder;

        for seed in 0..5 {
            let config = GameConfig::new(0, 4).unwrap().with_seed(seed);
            let mut game = GameLoop::new(&config, &DeckBuilder::standard()).unwrap();
            let dealt = game.market().total_cards();

            let outcome = game.run(&mut BotTurnHandler::new(seed));

            assert!(game.market().is_exhausted());
            let in_hands: usize = game.roster().iter().map(|p| p.hand.len()).sum();
            assert_eq!(in_hands, dealt);
            assert_eq!(outcome.scores.len(), 4);
        }
    }
}
