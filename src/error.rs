//! Error taxonomy for encounter setup.
//!
//! Invalid moves during play are not errors; they surface as `false` /
//! `None` returns with all partial state rolled back. Only encounter
//! construction and roster parsing can fail hard.

use thiserror::Error;

/// Fatal setup failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncounterError {
    /// The roster names a behavior variant outside the fixed set.
    #[error("unknown monster type: {0:?}")]
    UnknownMonsterType(String),

    /// A roster line could not be parsed.
    #[error("malformed roster line {line}: {text:?}")]
    MalformedRoster { line: usize, text: String },
}
