//! Core building blocks: combatant state and deterministic RNG.

pub mod combatant;
pub mod rng;

pub use combatant::Combatant;
pub use rng::{GameRng, GameRngState};
