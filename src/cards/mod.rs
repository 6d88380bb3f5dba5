//! Card system: the fixed catalog of playable templates.
//!
//! ## Key Types
//!
//! - `CardKind`: closed enum of playable cards
//! - `CardSpec`: static template (cost, damage, block, statuses)
//! - `StatusEffect`: the effects a card can apply

pub mod catalog;

pub use catalog::{CardKind, CardSpec, StatusEffect};
