//! Deck, hand, and discard pile management.
//!
//! Every card the player owns lives in exactly one of the three piles.
//! All operations here only move cards between piles; the multiset of
//! owned cards is invariant for the lifetime of an encounter.
//!
//! Drawing is randomized through the injected `GameRng`, sampling
//! distinct deck positions without replacement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardKind;
use crate::core::GameRng;

/// Cards drawn into the hand at the start of each player turn.
pub const HAND_SIZE: usize = 5;

/// The player's three card piles.
///
/// Ordered sequences: the deck and discard grow at the end, and the
/// hand holds cards in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    deck: Vec<CardKind>,
    hand: SmallVec<[CardKind; 8]>,
    discard: Vec<CardKind>,
}

impl Piles {
    /// Create piles with every card in the deck.
    #[must_use]
    pub fn new(deck: Vec<CardKind>) -> Self {
        Self {
            deck,
            hand: SmallVec::new(),
            discard: Vec::new(),
        }
    }

    /// Cards currently in the deck, in order.
    #[must_use]
    pub fn deck(&self) -> &[CardKind] {
        &self.deck
    }

    /// Cards currently in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardKind] {
        &self.hand
    }

    /// Cards in the discard pile, oldest first.
    #[must_use]
    pub fn discard(&self) -> &[CardKind] {
        &self.discard
    }

    /// Total cards owned across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Encounter-start reset: hand and discard move to the end of the
    /// deck (hand first), leaving both empty.
    pub fn start_new_encounter(&mut self) {
        self.deck.extend(self.hand.drain(..));
        self.deck.append(&mut self.discard);
    }

    /// Turn-end reset: the hand moves to the end of the discard pile.
    pub fn end_turn(&mut self) {
        self.discard.extend(self.hand.drain(..));
    }

    /// Draw up to a full hand from the deck.
    ///
    /// If the deck holds fewer than `HAND_SIZE` cards, the discard pile
    /// is first folded back into the deck (preserving its order). Cards
    /// are then sampled from the deck without replacement until the
    /// hand holds `HAND_SIZE` cards or the deck runs out.
    pub fn draw(&mut self, rng: &mut GameRng) {
        if self.deck.len() < HAND_SIZE {
            self.deck.append(&mut self.discard);
        }

        let want = HAND_SIZE.saturating_sub(self.hand.len()).min(self.deck.len());
        if want == 0 {
            return;
        }

        let mut picked = rng.sample_indices(want, self.deck.len());
        for &i in &picked {
            self.hand.push(self.deck[i]);
        }

        // Remove drawn cards back-to-front so indices stay valid
        picked.sort_unstable();
        for &i in picked.iter().rev() {
            self.deck.remove(i);
        }
    }

    /// Move the card at `index` in the hand to the end of the discard
    /// pile, returning it.
    ///
    /// Panics if `index` is out of bounds.
    pub(crate) fn discard_from_hand(&mut self, index: usize) -> CardKind {
        let kind = self.hand.remove(index);
        self.discard.push(kind);
        kind
    }

    /// Undo the most recent `discard_from_hand`, restoring the card to
    /// its original hand position.
    ///
    /// Panics if the discard pile is empty.
    pub(crate) fn undo_discard_to_hand(&mut self, index: usize) {
        let Some(kind) = self.discard.pop() else {
            panic!("undo_discard_to_hand called with empty discard pile");
        };
        let idx = index.min(self.hand.len());
        self.hand.insert(idx, kind);
    }
}
