//! MatchOutcome and MatchResult: one recorded game from a player's point of view.

use serde::{Deserialize, Serialize};

/// How a single match ended for the player.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    /// Parse a single-letter code (`W`, `D` or `L`, any case).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'W' => Some(MatchOutcome::Win),
            'D' => Some(MatchOutcome::Draw),
            'L' => Some(MatchOutcome::Loss),
            _ => None,
        }
    }
}

/// A played match. Sequences of these are kept in the order the matches were played.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
}

impl MatchResult {
    pub fn new(outcome: MatchOutcome) -> Self {
        Self { outcome }
    }
}

impl From<MatchOutcome> for MatchResult {
    fn from(outcome: MatchOutcome) -> Self {
        Self::new(outcome)
    }
}
