//! Plain-text views for terminal front ends.
//!
//! Rendering never mutates: the upcoming point card of each pile comes
//! from [`Market::next_point_card`], which previews the replenishment a
//! buy would trigger without performing it.
//!
//! Vegetable slots are labelled `A` through `F`: `A`..`C` are slot 0 of
//! piles 0..2, `D`..`F` are slot 1.

use std::fmt::Write;

use crate::cards::Vegetable;
use crate::core::Player;
use crate::market::{Market, PILE_COUNT, SLOTS_PER_PILE};

/// Render the market: one line per point-card pile, one per slot row.
#[must_use]
pub fn render_market(market: &Market) -> String {
    let mut out = String::new();
    out.push_str("Point cards:\n");
    for pile in 0..PILE_COUNT {
        match market.next_point_card(pile) {
            Some(card) => {
                let _ = writeln!(out, "  [{pile}] {card}");
            }
            None => {
                let _ = writeln!(out, "  [{pile}] --");
            }
        }
    }
    out.push_str("Veggie cards:\n");
    for slot in 0..SLOTS_PER_PILE {
        out.push(' ');
        for pile in 0..PILE_COUNT {
            let label = slot_label(pile, slot);
            match market.veggie_card(pile, slot) {
                Some(card) => {
                    let _ = write!(out, " [{label}] {card}");
                }
                None => {
                    let _ = write!(out, " [{label}] --");
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Render a hand: indexed criteria cards, then the vegetable tallies.
#[must_use]
pub fn render_hand(player: &Player) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}'s hand", player.id);

    out.push_str("Criteria cards:\n");
    let mut any = false;
    for (i, card) in player
        .hand
        .iter()
        .filter(|c| c.is_criteria_up())
        .enumerate()
    {
        let _ = writeln!(out, "  [{i}] {card}");
        any = true;
    }
    if !any {
        out.push_str("  (none)\n");
    }

    out.push_str("Vegetables:");
    for veg in Vegetable::ALL {
        let count = crate::cards::count_vegetable(&player.hand, veg);
        let _ = write!(out, " {veg} x{count}");
    }
    out.push('\n');
    out
}

/// The letter shown next to a market slot.
#[must_use]
pub fn slot_label(pile: usize, slot: usize) -> char {
    assert!(pile < PILE_COUNT && slot < SLOTS_PER_PILE);
    (b'A' + (slot * PILE_COUNT + pile) as u8) as char
}

/// Decode a player's slot choice. Accepts the letters shown by
/// [`render_market`], case-insensitively; anything else is `None`.
#[must_use]
pub fn market_choice(choice: char) -> Option<(usize, usize)> {
    let index = match choice {
        'A'..='F' => choice as usize - 'A' as usize,
        'a'..='f' => choice as usize - 'a' as usize,
        _ => return None,
    };
    Some((index % PILE_COUNT, index / PILE_COUNT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::PlayerId;
    use crate::criteria::Rule;
    use crate::market::Pile;
    use im::Vector;

    fn card(text: &str, veg: Vegetable) -> Card {
        Card::new(veg, Rule::parse(text).unwrap())
    }

    fn small_market() -> Market {
        let pile = |cards: Vec<Card>| Pile::new(Vector::from(cards));
        Market::new(vec![
            pile(vec![
                card("2 / CARROT", Vegetable::Carrot),
                card("1 / ONION", Vegetable::Onion),
                card("MOST PEPPER = 10", Vegetable::Pepper),
            ]),
            pile(vec![]),
            pile(vec![]),
        ])
    }

    #[test]
    fn test_render_market_shows_previews_and_slots() {
        let market = small_market();
        let text = render_market(&market);

        // Pile 0's upcoming point card, criteria side up.
        assert!(text.contains("[0] MOST PEPPER = 10 (PEPPER)"));
        // Empty piles render placeholders.
        assert!(text.contains("[1] --"));
        // Slot cards show vegetable side only.
        assert!(text.contains("[A] CARROT"));
        assert!(text.contains("[D] ONION"));
        assert!(text.contains("[B] --"));
    }

    #[test]
    fn test_render_market_does_not_mutate() {
        let market = small_market();
        let snapshot = market.clone();
        let _ = render_market(&market);
        assert_eq!(market, snapshot);
    }

    #[test]
    fn test_render_hand() {
        let mut player = Player::new(PlayerId::new(1));
        player.hand = vec![
            card("COMPLETE SET = 12", Vegetable::Tomato),
            Card::vegetable_only(Vegetable::Carrot),
            Card::vegetable_only(Vegetable::Carrot),
        ];
        let text = render_hand(&player);

        assert!(text.contains("Player 1's hand"));
        assert!(text.contains("[0] COMPLETE SET = 12 (TOMATO)"));
        assert!(text.contains("CARROT x2"));
        assert!(text.contains("TOMATO x0"));
    }

    #[test]
    fn test_slot_labels_round_trip() {
        for pile in 0..PILE_COUNT {
            for slot in 0..SLOTS_PER_PILE {
                let label = slot_label(pile, slot);
                assert_eq!(market_choice(label), Some((pile, slot)));
                assert_eq!(
                    market_choice(label.to_ascii_lowercase()),
                    Some((pile, slot))
                );
            }
        }
    }

    #[test]
    fn test_market_choice_rejects_garbage() {
        assert_eq!(market_choice('G'), None);
        assert_eq!(market_choice('0'), None);
        assert_eq!(market_choice(' '), None);
    }
}
