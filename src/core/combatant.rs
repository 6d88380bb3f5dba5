//! Shared combatant state: hit points, block, and status counters.
//!
//! Both the player and every monster carry a `Combatant`. It owns the
//! arithmetic that the rest of the engine builds on: block absorbing
//! damage before hit points, defeat detection, and the per-turn decay
//! of status effects.
//!
//! ## Invariants
//!
//! - `0 <= hp <= max_hp` at all times
//! - `block`, `weak_turns`, `vulnerable_turns` are never negative
//!
//! These hold by construction; violating inputs are programming errors
//! and are caught with debug assertions rather than recoverable errors.

use serde::{Deserialize, Serialize};

/// Mutable combat state shared by the player and all monsters.
///
/// ## Usage
///
/// ```
/// use spire_core::core::Combatant;
///
/// let mut c = Combatant::new(20);
/// c.add_block(5);
///
/// // Block absorbs first, the excess hits hp
/// c.take_damage(8);
/// assert_eq!(c.block(), 0);
/// assert_eq!(c.hp(), 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    max_hp: i64,
    hp: i64,
    block: i64,
    strength: i64,
    weak_turns: i64,
    vulnerable_turns: i64,
}

impl Combatant {
    /// Create a combatant at full health with no block or statuses.
    ///
    /// Panics if `max_hp` is not positive.
    #[must_use]
    pub fn new(max_hp: i64) -> Self {
        assert!(max_hp > 0, "max_hp must be positive, got {max_hp}");
        Self {
            max_hp,
            hp: max_hp,
            block: 0,
            strength: 0,
            weak_turns: 0,
            vulnerable_turns: 0,
        }
    }

    /// Current hit points.
    #[must_use]
    pub fn hp(&self) -> i64 {
        self.hp
    }

    /// Maximum (starting) hit points.
    #[must_use]
    pub fn max_hp(&self) -> i64 {
        self.max_hp
    }

    /// Current block.
    #[must_use]
    pub fn block(&self) -> i64 {
        self.block
    }

    /// Current strength (additive damage bonus on every attack).
    #[must_use]
    pub fn strength(&self) -> i64 {
        self.strength
    }

    /// Turns of weakness remaining.
    #[must_use]
    pub fn weak_turns(&self) -> i64 {
        self.weak_turns
    }

    /// Turns of vulnerability remaining.
    #[must_use]
    pub fn vulnerable_turns(&self) -> i64 {
        self.vulnerable_turns
    }

    /// Apply incoming damage.
    ///
    /// Block absorbs first; only the excess reduces hit points, and hp
    /// floors at 0.
    pub fn take_damage(&mut self, amount: i64) {
        debug_assert!(amount >= 0, "damage must be non-negative, got {amount}");
        let absorbed = amount.min(self.block);
        self.block -= absorbed;
        self.hp = (self.hp - (amount - absorbed)).max(0);
    }

    /// A combatant is defeated exactly when its hp has reached 0.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Gain block. Uncapped.
    pub fn add_block(&mut self, amount: i64) {
        debug_assert!(amount >= 0, "block must be non-negative, got {amount}");
        self.block += amount;
    }

    /// Gain strength. Uncapped.
    pub fn add_strength(&mut self, amount: i64) {
        self.strength += amount;
    }

    /// Gain turns of weakness. Uncapped.
    pub fn add_weak(&mut self, turns: i64) {
        debug_assert!(turns >= 0, "weak turns must be non-negative, got {turns}");
        self.weak_turns += turns;
    }

    /// Gain turns of vulnerability. Uncapped.
    pub fn add_vulnerable(&mut self, turns: i64) {
        debug_assert!(
            turns >= 0,
            "vulnerable turns must be non-negative, got {turns}"
        );
        self.vulnerable_turns += turns;
    }

    /// Turn-start reset: block drops to 0, each active status ticks
    /// down by one turn.
    pub fn start_new_turn(&mut self) {
        self.block = 0;
        if self.weak_turns > 0 {
            self.weak_turns -= 1;
        }
        if self.vulnerable_turns > 0 {
            self.vulnerable_turns -= 1;
        }
    }
}
