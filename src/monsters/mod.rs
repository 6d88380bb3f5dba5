//! Monster behavior variants and identity.
//!
//! ## Key Types
//!
//! - `MonsterKind`: closed enum of behavior variants
//! - `Monster`: a combatant plus its per-variant behavior state
//! - `MonsterAction`: one enemy-phase action (damage plus optional statuses)
//! - `MonsterIdAllocator`: process-wide monotonic id source, injected so
//!   id assignment stays deterministic under test control
//!
//! Behaviors are deterministic given their internal state and the
//! injected RNG: the Louse latches its damage roll at creation, the
//! Cultist escalates with a call counter, and the Jaw Worm converts
//! damage taken into block and retaliation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Combatant, GameRng};

/// Unique monster identifier.
///
/// Assigned monotonically by `MonsterIdAllocator` and never reused,
/// even after the monster is removed from an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monster({})", self.0)
    }
}

/// Monotonic source of monster ids.
///
/// Owned by the orchestrating caller and threaded into encounter
/// construction, so ids stay unique across every encounter in a
/// process and deterministic in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterIdAllocator {
    next: u32,
}

impl MonsterIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> MonsterId {
        let id = MonsterId(self.next);
        self.next += 1;
        id
    }
}

/// The closed set of monster behavior variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Louse,
    Cultist,
    JawWorm,
}

impl MonsterKind {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MonsterKind::Louse => "Louse",
            MonsterKind::Cultist => "Cultist",
            MonsterKind::JawWorm => "JawWorm",
        }
    }

    /// Resolve a roster type name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<MonsterKind> {
        match name.to_ascii_lowercase().as_str() {
            "louse" => Some(MonsterKind::Louse),
            "cultist" => Some(MonsterKind::Cultist),
            "jawworm" => Some(MonsterKind::JawWorm),
            _ => None,
        }
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One enemy-phase action.
///
/// `damage` is the base amount before strength folding and multipliers;
/// absent statuses mean the action does not touch them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterAction {
    pub damage: i64,
    pub weak: Option<i64>,
    pub vulnerable: Option<i64>,
    pub strength: Option<i64>,
}

/// Per-variant behavior state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum Behavior {
    /// Damage rolled once at creation; constant for the monster's life.
    Louse { damage: i64 },
    /// Counts action calls to escalate damage and alternate weakness.
    Cultist { calls: u64 },
    /// Stateless; reads its own hp each call.
    JawWorm,
}

/// A monster in an encounter: identity, combat state, behavior.
///
/// ## Usage
///
/// ```
/// use spire_core::core::GameRng;
/// use spire_core::monsters::{Monster, MonsterIdAllocator, MonsterKind};
///
/// let mut ids = MonsterIdAllocator::new();
/// let mut rng = GameRng::new(42);
/// let mut louse = Monster::new(MonsterKind::Louse, 10, &mut ids, &mut rng);
///
/// let action = louse.action();
/// assert!((5..=7).contains(&action.damage));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    id: MonsterId,
    /// Shared combat state (hp, block, statuses).
    pub combatant: Combatant,
    behavior: Behavior,
}

impl Monster {
    /// Create a monster of the given kind at full health.
    ///
    /// The RNG is consumed only by the Louse's one-time damage roll.
    /// Panics if `max_hp` is not positive.
    #[must_use]
    pub fn new(
        kind: MonsterKind,
        max_hp: i64,
        ids: &mut MonsterIdAllocator,
        rng: &mut GameRng,
    ) -> Self {
        let behavior = match kind {
            MonsterKind::Louse => Behavior::Louse {
                damage: rng.gen_range_inclusive(5, 7),
            },
            MonsterKind::Cultist => Behavior::Cultist { calls: 0 },
            MonsterKind::JawWorm => Behavior::JawWorm,
        };

        Self {
            id: ids.next_id(),
            combatant: Combatant::new(max_hp),
            behavior,
        }
    }

    /// This monster's unique id.
    #[must_use]
    pub fn id(&self) -> MonsterId {
        self.id
    }

    /// The behavior variant.
    #[must_use]
    pub fn kind(&self) -> MonsterKind {
        match self.behavior {
            Behavior::Louse { .. } => MonsterKind::Louse,
            Behavior::Cultist { .. } => MonsterKind::Cultist,
            Behavior::JawWorm => MonsterKind::JawWorm,
        }
    }

    /// Produce this monster's next action.
    ///
    /// Advances behavior state (the Cultist's call counter) and applies
    /// behavior side effects (the Jaw Worm's block gain). The strength
    /// field is present only while current strength is positive.
    pub fn action(&mut self) -> MonsterAction {
        let strength = if self.combatant.strength() > 0 {
            Some(self.combatant.strength())
        } else {
            None
        };

        match &mut self.behavior {
            Behavior::Louse { damage } => MonsterAction {
                damage: *damage,
                strength,
                ..MonsterAction::default()
            },
            Behavior::Cultist { calls } => {
                let n = *calls;
                *calls += 1;
                MonsterAction {
                    damage: if n == 0 { 0 } else { 6 + n as i64 },
                    weak: Some(if n % 2 == 1 { 1 } else { 0 }),
                    strength,
                    ..MonsterAction::default()
                }
            }
            Behavior::JawWorm => {
                let damage_taken = self.combatant.max_hp() - self.combatant.hp();
                // Block rounds up, retaliation rounds down
                self.combatant.add_block((damage_taken + 1) / 2);
                MonsterAction {
                    damage: damage_taken / 2,
                    strength,
                    ..MonsterAction::default()
                }
            }
        }
    }
}
