//! A single draw pile with its two face-up market slots.
//!
//! The draw stack is consumed from the front (point-card draws and slot
//! refills) and receives borrowed cards at the back, so both ends are O(1).
//! Cross-pile movement is the market's job; a pile on its own never reaches
//! into a sibling.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Face-up market slots per pile.
pub const SLOTS_PER_PILE: usize = 2;

/// One draw stack plus its two vegetable-side-up market slots.
///
/// Uses an `im::Vector` so cloning a pile (and therefore a whole market,
/// for bot lookahead) is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    draw: Vector<Card>,
    slots: [Option<Card>; SLOTS_PER_PILE],
}

impl Pile {
    /// Build a pile from a pre-shuffled, pre-dealt slice of the combined
    /// deck. The first two cards are peeled into the market slots and
    /// turned vegetable-side-up; the rest stay face-down in the draw stack.
    #[must_use]
    pub fn new(mut cards: Vector<Card>) -> Self {
        let mut slots: [Option<Card>; SLOTS_PER_PILE] = [None, None];
        for slot in &mut slots {
            if let Some(mut card) = cards.pop_front() {
                card.flip_to_vegetable();
                *slot = Some(card);
            }
        }
        Self { draw: cards, slots }
    }

    /// Number of face-down cards in the draw stack.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    /// The next face-down card, without removing it or replenishing.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.draw.front()
    }

    /// The card a sibling would lend, without removing it.
    #[must_use]
    pub fn back(&self) -> Option<&Card> {
        self.draw.back()
    }

    /// Read a market slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= SLOTS_PER_PILE`; slot indices are a caller
    /// contract, never clamped.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&Card> {
        assert!(slot < SLOTS_PER_PILE, "slot index {slot} out of range");
        self.slots[slot].as_ref()
    }

    /// Whether the draw stack and both slots are all empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw.is_empty() && self.slots.iter().all(Option::is_none)
    }

    /// Total cards held: draw stack plus occupied slots.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.draw.len() + self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Remove the next face-down card.
    pub(crate) fn draw_front(&mut self) -> Option<Card> {
        self.draw.pop_front()
    }

    /// Give up the far-end card for a sibling's replenishment.
    pub(crate) fn lend_back(&mut self) -> Option<Card> {
        self.draw.pop_back()
    }

    /// Receive a borrowed card at the back of the draw stack.
    pub(crate) fn receive(&mut self, card: Card) {
        self.draw.push_back(card);
    }

    /// Empty a slot, returning its card.
    pub(crate) fn take_slot(&mut self, slot: usize) -> Option<Card> {
        assert!(slot < SLOTS_PER_PILE, "slot index {slot} out of range");
        self.slots[slot].take()
    }

    /// Refill a slot; the card is turned vegetable-side-up.
    pub(crate) fn fill_slot(&mut self, slot: usize, mut card: Card) {
        card.flip_to_vegetable();
        self.slots[slot] = Some(card);
    }
}
