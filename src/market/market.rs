//! The market: the unit the replenishment algorithm reasons about.
//!
//! Buy and peek operations live here rather than on [`Pile`] because a
//! pile that runs dry borrows from a sibling: replenishment is a
//! multi-pile read-then-move sequence. A point-card request on a pile
//! succeeds exactly when that pile still has draw cards or some sibling
//! holds more than one.
//!
//! Exhaustion is a normal result (`None`), not an error. Out-of-range pile
//! or slot indices are caller contract violations and panic.
//!
//! The market is shared mutable state visited sequentially by the turn
//! driver; replenishment is not safe under interleaving, so a concurrent
//! host must give each game session one exclusive owner.

use serde::{Deserialize, Serialize};

use super::pile::{Pile, SLOTS_PER_PILE};
use crate::cards::Card;

/// Number of piles; fixed for the whole game.
pub const PILE_COUNT: usize = 3;

/// The shared market of [`PILE_COUNT`] piles.
///
/// Cards only ever leave the market into hands; the total card count is
/// monotonically non-increasing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    piles: Vec<Pile>,
}

impl Market {
    /// Create a market from its dealt piles.
    ///
    /// # Panics
    ///
    /// Panics if `piles.len() != PILE_COUNT`.
    #[must_use]
    pub fn new(piles: Vec<Pile>) -> Self {
        assert_eq!(
            piles.len(),
            PILE_COUNT,
            "a market holds exactly {PILE_COUNT} piles"
        );
        Self { piles }
    }

    /// Borrow a pile for inspection.
    ///
    /// # Panics
    ///
    /// Panics if `pile >= PILE_COUNT`.
    #[must_use]
    pub fn pile(&self, pile: usize) -> &Pile {
        assert!(pile < self.piles.len(), "pile index {pile} out of range");
        &self.piles[pile]
    }

    /// Number of piles.
    #[must_use]
    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// Whether every pile's draw stack and slots are exhausted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.piles.iter().all(Pile::is_empty)
    }

    /// Total cards remaining across all draw stacks and slots.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(Pile::card_count).sum()
    }

    /// The next point card of a pile, replenishing the pile's draw stack
    /// from its largest sibling first if it is empty. The card stays in
    /// the market.
    ///
    /// Returns `None` only when no replenishment source exists; that is a
    /// terminal state for this pile's draw stack, not an error.
    ///
    /// # Panics
    ///
    /// Panics if `pile >= PILE_COUNT`.
    pub fn peek_point_card(&mut self, pile: usize) -> Option<&Card> {
        assert!(pile < self.piles.len(), "pile index {pile} out of range");
        if self.piles[pile].draw_len() == 0 && !self.replenish(pile) {
            return None;
        }
        self.piles[pile].front()
    }

    /// Like [`Market::peek_point_card`] but without mutating anything:
    /// shows the card a point-card request on `pile` would yield right
    /// now. Used by views and lookahead.
    ///
    /// # Panics
    ///
    /// Panics if `pile >= PILE_COUNT`.
    #[must_use]
    pub fn next_point_card(&self, pile: usize) -> Option<&Card> {
        assert!(pile < self.piles.len(), "pile index {pile} out of range");
        if let Some(card) = self.piles[pile].front() {
            return Some(card);
        }
        let donor = self.largest_other(pile)?;
        self.piles[donor].back()
    }

    /// Remove and return the next point card of a pile, replenishing
    /// first if needed. The card keeps its criteria side up; ownership
    /// transfers to the caller.
    ///
    /// # Panics
    ///
    /// Panics if `pile >= PILE_COUNT`.
    pub fn buy_point_card(&mut self, pile: usize) -> Option<Card> {
        assert!(pile < self.piles.len(), "pile index {pile} out of range");
        if self.piles[pile].draw_len() == 0 && !self.replenish(pile) {
            return None;
        }
        self.piles[pile].draw_front()
    }

    /// Read a market slot without mutation.
    ///
    /// # Panics
    ///
    /// Panics if `pile >= PILE_COUNT` or `slot >= SLOTS_PER_PILE`.
    #[must_use]
    pub fn veggie_card(&self, pile: usize, slot: usize) -> Option<&Card> {
        self.pile(pile).slot(slot)
    }

    /// Remove and return a slot's card (already vegetable-side-up), then
    /// refill the slot from this pile's own draw stack. If the draw stack
    /// holds one card or fewer, the pile replenishes from its largest
    /// sibling first; if no sibling can lend, the slot stays empty for the
    /// rest of the game.
    ///
    /// Returns `None` if the slot is already empty.
    ///
    /// # Panics
    ///
    /// Panics if `pile >= PILE_COUNT` or `slot >= SLOTS_PER_PILE`.
    pub fn buy_veggie_card(&mut self, pile: usize, slot: usize) -> Option<Card> {
        assert!(pile < self.piles.len(), "pile index {pile} out of range");
        assert!(slot < SLOTS_PER_PILE, "slot index {slot} out of range");

        let card = self.piles[pile].take_slot(slot)?;

        let can_refill = self.piles[pile].draw_len() > 1 || self.replenish(pile);
        if can_refill {
            if let Some(next) = self.piles[pile].draw_front() {
                self.piles[pile].fill_slot(slot, next);
            }
        }

        Some(card)
    }

    /// Move one card from the far end of the largest sibling's draw stack
    /// into this pile's draw stack.
    ///
    /// The donor is the strictly largest sibling; ties break to the lowest
    /// pile index. Fails (returning false) when no sibling holds more than
    /// one card.
    fn replenish(&mut self, pile: usize) -> bool {
        let Some(donor) = self.largest_other(pile) else {
            return false;
        };
        // largest_other guarantees the donor holds at least two cards
        if let Some(card) = self.piles[donor].lend_back() {
            self.piles[pile].receive(card);
            true
        } else {
            false
        }
    }

    /// The sibling with the strictly largest draw stack, if it holds more
    /// than one card. Ties break to the lowest index.
    fn largest_other(&self, pile: usize) -> Option<usize> {
        let mut donor = None;
        let mut donor_len = 1; // a donor must hold at least two cards
        for (i, candidate) in self.piles.iter().enumerate() {
            if i != pile && candidate.draw_len() > donor_len {
                donor_len = candidate.draw_len();
                donor = Some(i);
            }
        }
        donor
    }
}
