//! End-of-game scoring and result handling.
//!
//! Scores are computed against a frozen roster snapshot: every player's
//! relative rules see the same hands, regardless of scoring order. Only
//! criteria-side-up cards score; a flipped card is a vegetable and nothing
//! else.

use crate::cards::Card;
use crate::core::{Player, PlayerId};

/// Final scores and the winning player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// Every player's final score, in roster order.
    pub scores: Vec<(PlayerId, i32)>,
    /// The winner under the first-past tie policy of [`resolve_winner`].
    pub winner: PlayerId,
}

/// Total score for one hand: the sum of its criteria-side-up rules, each
/// evaluated against the full roster.
///
/// `hand` need not be the roster entry for `player`; bot lookahead passes
/// candidate hands while the roster still holds the real ones.
#[must_use]
pub fn score_hand(hand: &[Card], player: PlayerId, roster: &[Player]) -> i32 {
    hand.iter()
        .filter(|card| card.is_criteria_up())
        .filter_map(Card::criteria)
        .map(|criteria| criteria.evaluate(hand, player, roster))
        .sum()
}

/// Score every player against a snapshot of the roster, write the results
/// back, and resolve the winner.
///
/// # Panics
///
/// Panics if the roster is empty.
pub fn score_roster(roster: &mut [Player]) -> GameOutcome {
    let snapshot: Vec<Player> = roster.to_vec();
    for player in roster.iter_mut() {
        player.score = score_hand(&player.hand, player.id, &snapshot);
    }
    let scores = roster.iter().map(|p| (p.id, p.score)).collect();
    GameOutcome {
        scores,
        winner: resolve_winner(roster),
    }
}

/// The player with the highest score.
///
/// Ties go to the earliest tied player in roster order. A roster whose
/// scores are all zero or negative also resolves to the first player.
///
/// # Panics
///
/// Panics if the roster is empty.
#[must_use]
pub fn resolve_winner(roster: &[Player]) -> PlayerId {
    assert!(!roster.is_empty(), "cannot resolve a winner without players");
    let mut winner = roster[0].id;
    let mut best = 0;
    for player in roster {
        if player.score > best {
            best = player.score;
            winner = player.id;
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Vegetable;
    use crate::criteria::Rule;

    fn veg(vegetable: Vegetable) -> Card {
        Card::vegetable_only(vegetable)
    }

    fn rule_card(text: &str) -> Card {
        Card::new(Vegetable::Pepper, Rule::parse(text).unwrap())
    }

    fn roster(hands: Vec<Vec<Card>>) -> Vec<Player> {
        hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| {
                let mut player = Player::new(PlayerId::new(i as u8));
                player.hand = hand;
                player
            })
            .collect()
    }

    #[test]
    fn test_score_hand_sums_criteria_cards() {
        let hand = vec![
            rule_card("2 / CARROT"),
            rule_card("1 / CARROT, 1 / ONION"),
            veg(Vegetable::Carrot),
            veg(Vegetable::Carrot),
            veg(Vegetable::Onion),
        ];
        let roster = roster(vec![vec![], vec![]]);
        // 2*2 + (2 + 1)
        assert_eq!(score_hand(&hand, PlayerId::new(0), &roster), 7);
    }

    #[test]
    fn test_flipped_cards_do_not_score() {
        let mut card = rule_card("2 / CARROT");
        card.flip_to_vegetable();
        let hand = vec![card, veg(Vegetable::Carrot)];
        let roster = roster(vec![vec![], vec![]]);
        assert_eq!(score_hand(&hand, PlayerId::new(0), &roster), 0);
    }

    #[test]
    fn test_empty_hand_scores_zero() {
        let roster = roster(vec![vec![], vec![]]);
        assert_eq!(score_hand(&[], PlayerId::new(0), &roster), 0);
    }

    #[test]
    fn test_score_roster_writes_scores() {
        let mut roster = roster(vec![
            vec![rule_card("2 / CARROT"), veg(Vegetable::Carrot)],
            vec![veg(Vegetable::Onion)],
        ]);
        let outcome = score_roster(&mut roster);

        assert_eq!(roster[0].score, 2);
        assert_eq!(roster[1].score, 0);
        assert_eq!(
            outcome.scores,
            vec![(PlayerId::new(0), 2), (PlayerId::new(1), 0)]
        );
        assert_eq!(outcome.winner, PlayerId::new(0));
    }

    #[test]
    fn test_relative_rules_see_the_snapshot() {
        // Both players hold MOST CARROT; both tie and both get the points.
        let mut roster = roster(vec![
            vec![rule_card("MOST CARROT = 10"), veg(Vegetable::Carrot)],
            vec![rule_card("MOST CARROT = 10"), veg(Vegetable::Carrot)],
        ]);
        let outcome = score_roster(&mut roster);
        assert_eq!(roster[0].score, 10);
        assert_eq!(roster[1].score, 10);
        assert_eq!(outcome.winner, PlayerId::new(0));
    }

    #[test]
    fn test_winner_is_strict_max() {
        let mut roster = roster(vec![vec![], vec![], vec![]]);
        roster[0].score = 3;
        roster[1].score = 9;
        roster[2].score = 5;
        assert_eq!(resolve_winner(&roster), PlayerId::new(1));
    }

    #[test]
    fn test_winner_tie_goes_to_earliest() {
        let mut roster = roster(vec![vec![], vec![], vec![]]);
        roster[0].score = 4;
        roster[1].score = 9;
        roster[2].score = 9;
        assert_eq!(resolve_winner(&roster), PlayerId::new(1));
    }

    #[test]
    fn test_all_nonpositive_scores_resolve_to_first() {
        let mut roster = roster(vec![vec![], vec![]]);
        roster[0].score = -2;
        roster[1].score = -1;
        assert_eq!(resolve_winner(&roster), PlayerId::new(0));
    }

    #[test]
    #[should_panic(expected = "without players")]
    fn test_empty_roster_panics() {
        let _ = resolve_winner(&[]);
    }
}
