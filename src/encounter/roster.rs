//! Roster parsing for the encounter game-file format.
//!
//! The format is line-oriented:
//!
//! ```text
//! Encounter 1
//! Louse 10
//! Cultist 20
//!
//! Encounter 2
//! JawWorm 30
//! ```
//!
//! Lines starting with `Encounter` open a new roster; non-blank lines
//! are `<MonsterType> <start_hp>` pairs. Reading from disk stays
//! outside the core, so the parser takes the file contents as a `&str`.
//!
//! Monster type names are validated later, at encounter construction;
//! the parser only checks line shape and hit points.

use crate::error::EncounterError;

/// One monster entry: behavior type name and starting hp.
pub type MonsterEntry = (String, i64);

/// The monsters of one encounter, in arrival order.
pub type Roster = Vec<MonsterEntry>;

/// Parse a game file into per-encounter rosters.
///
/// Returns `EncounterError::MalformedRoster` for monster lines that do
/// not have exactly two fields, hp values that are not positive
/// integers, or monster lines appearing before any `Encounter` header.
pub fn parse_encounters(text: &str) -> Result<Vec<Roster>, EncounterError> {
    let mut encounters: Vec<Roster> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let malformed = || EncounterError::MalformedRoster {
            line: index + 1,
            text: raw.to_string(),
        };

        if line.starts_with("Encounter") {
            encounters.push(Vec::new());
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let name = fields.next().ok_or_else(malformed)?;
        let hp: i64 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or_else(malformed)?;
        if fields.next().is_some() || hp <= 0 {
            return Err(malformed());
        }

        let roster = encounters.last_mut().ok_or_else(malformed)?;
        roster.push((name.to_string(), hp));
    }

    Ok(encounters)
}
