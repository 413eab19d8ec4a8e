//! Data structures for tournament scoring: match results, players, standings, errors.

mod error;
mod match_result;
mod player;

pub use error::{ErrorKind, RosterError, ScoringError};
pub use match_result::{MatchOutcome, MatchResult};
pub use player::{Player, PlayerId, Standing};
