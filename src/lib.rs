//! # spire-core
//!
//! A deterministic turn-based card combat engine: a player and a roster
//! of monsters exchange discrete actions each turn over shared resource
//! pools (energy, hit points, block, status durations).
//!
//! ## Design Principles
//!
//! 1. **Closed variant sets**: Cards and monster behaviors are enums
//!    over fixed template/behavior sets, not open hierarchies. Variants
//!    share one combatant state shape and differ only in their
//!    `describe()`/`action()` computation.
//!
//! 2. **Deterministic by injection**: All randomness (monster damage
//!    variance, card draw) flows through a seeded `GameRng`; monster
//!    ids come from an injected allocator. Every encounter replays
//!    exactly from its inputs.
//!
//! 3. **Validate, apply, or roll back**: A move either applies
//!    completely or is rejected with partial state restored
//!    element-for-element. Invariant violations are programming errors,
//!    not recoverable failures.
//!
//! ## Modules
//!
//! - `core`: combatant state primitives and the deterministic RNG
//! - `cards`: the fixed card catalog and description rendering
//! - `player`: energy and the deck/hand/discard piles
//! - `monsters`: behavior variants and the monotonic id allocator
//! - `encounter`: the turn state machine and roster parsing
//!
//! ## Out of Scope
//!
//! Rendering, input handling, persistence, and file I/O live outside
//! this crate; the roster parser takes file contents as a `&str` and
//! the caller owns the game loop (including the post-enemy-phase
//! defeat check).

pub mod cards;
pub mod core;
pub mod encounter;
pub mod error;
pub mod monsters;
pub mod player;

// Re-export commonly used types
pub use crate::cards::{CardKind, CardSpec, StatusEffect};
pub use crate::core::{Combatant, GameRng, GameRngState};
pub use crate::encounter::{parse_encounters, Encounter, MonsterEntry, Phase, Roster};
pub use crate::error::EncounterError;
pub use crate::monsters::{Monster, MonsterAction, MonsterId, MonsterIdAllocator, MonsterKind};
pub use crate::player::{Piles, Player, ENERGY_CAP, HAND_SIZE};
