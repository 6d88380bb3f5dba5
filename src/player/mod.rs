//! Player state: combatant, energy, and the three card piles.
//!
//! ## Key Types
//!
//! - `Player`: combatant + energy + `Piles`
//! - `Piles`: deck/hand/discard ownership and draw mechanics
//!
//! Preset constructors cover the two standard archetypes
//! (`Player::ironclad`, `Player::silent`); `Player::new` accepts any
//! deck.

pub mod piles;

pub use piles::{Piles, HAND_SIZE};

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::{Combatant, GameRng};

/// Energy available at the start of every player turn.
pub const ENERGY_CAP: i64 = 3;

/// The player-controlled combatant.
///
/// ## Usage
///
/// ```
/// use spire_core::player::{Player, ENERGY_CAP};
///
/// let player = Player::ironclad();
/// assert_eq!(player.combatant.max_hp(), 80);
/// assert_eq!(player.energy(), ENERGY_CAP);
/// assert_eq!(player.piles().total_cards(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Shared combat state (hp, block, statuses).
    pub combatant: Combatant,
    energy: i64,
    piles: Piles,
}

impl Player {
    /// Create a player with the given max hp and starting deck.
    #[must_use]
    pub fn new(max_hp: i64, deck: Vec<CardKind>) -> Self {
        Self {
            combatant: Combatant::new(max_hp),
            energy: ENERGY_CAP,
            piles: Piles::new(deck),
        }
    }

    /// The Ironclad: 80 hp, 5x Strike, 4x Defend, 1x Bash.
    #[must_use]
    pub fn ironclad() -> Self {
        let mut deck = vec![CardKind::Strike; 5];
        deck.extend(vec![CardKind::Defend; 4]);
        deck.push(CardKind::Bash);
        Self::new(80, deck)
    }

    /// The Silent: 70 hp, 5x Strike, 5x Defend, Neutralize, Survivor.
    #[must_use]
    pub fn silent() -> Self {
        let mut deck = vec![CardKind::Strike; 5];
        deck.extend(vec![CardKind::Defend; 5]);
        deck.push(CardKind::Neutralize);
        deck.push(CardKind::Survivor);
        Self::new(70, deck)
    }

    /// Current energy.
    #[must_use]
    pub fn energy(&self) -> i64 {
        self.energy
    }

    /// The player's card piles.
    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// Encounter-start reset: all owned cards return to the deck.
    pub fn start_new_encounter(&mut self) {
        self.piles.start_new_encounter();
    }

    /// Turn-end reset: the hand is discarded.
    pub fn end_turn(&mut self) {
        self.piles.end_turn();
    }

    /// Turn-start reset: block and status tick, energy refills to the
    /// cap, and a new hand is drawn.
    pub fn new_turn(&mut self, rng: &mut GameRng) {
        self.combatant.start_new_turn();
        self.energy = ENERGY_CAP;
        self.piles.draw(rng);
    }

    /// Play the first affordable card in hand matching `name`.
    ///
    /// On success the card moves to the discard pile, its cost is
    /// deducted, and the card is returned. Returns `None` (leaving all
    /// state untouched) when no card matches or the match is
    /// unaffordable.
    pub fn play_card(&mut self, name: &str) -> Option<CardKind> {
        self.play_card_indexed(name).map(|(kind, _)| kind)
    }

    /// `play_card` variant reporting the hand slot the card came from,
    /// so the encounter can roll the move back.
    pub(crate) fn play_card_indexed(&mut self, name: &str) -> Option<(CardKind, usize)> {
        let index = self
            .piles
            .hand()
            .iter()
            .position(|kind| kind.name() == name && kind.spec().energy_cost <= self.energy)?;

        let kind = self.piles.discard_from_hand(index);
        self.energy -= kind.spec().energy_cost;
        Some((kind, index))
    }

    /// Reverse the most recent `play_card_indexed`: the card returns to
    /// its hand slot and the energy is refunded.
    pub(crate) fn unplay_card(&mut self, kind: CardKind, index: usize) {
        self.piles.undo_discard_to_hand(index);
        self.energy += kind.spec().energy_cost;
    }
}
