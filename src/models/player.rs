//! Player and Standing data structures.

use crate::models::match_result::{MatchOutcome, MatchResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player.
///
/// A JSON roster may supply it so the `--json` standings can be joined back to the
/// caller's own records; a player loaded without one gets a fresh random id.
pub type PlayerId = Uuid;

/// A tournament participant. The scoring core only ever reads these.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default = "Uuid::new_v4")]
    pub id: PlayerId,
    pub name: String,
    /// Chronological match history. `None` means no history was supplied at all,
    /// which the calculator rejects; `Some(vec![])` is a player who has not played.
    #[serde(default)]
    pub matches: Option<Vec<MatchResult>>,
    #[serde(default)]
    pub is_disqualified: bool,
    /// Signed so that bad input is reported instead of being unrepresentable.
    #[serde(default)]
    pub penalty_points: i32,
}

impl Player {
    /// Create a player with the given name and an empty history. Other fields start at zero/false.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            matches: Some(Vec::new()),
            is_disqualified: false,
            penalty_points: 0,
        }
    }

    /// Builder: replace the match history with the given outcomes, in order.
    pub fn with_outcomes(mut self, outcomes: impl IntoIterator<Item = MatchOutcome>) -> Self {
        self.matches = Some(outcomes.into_iter().map(MatchResult::from).collect());
        self
    }

    pub fn disqualified(mut self) -> Self {
        self.is_disqualified = true;
        self
    }

    pub fn with_penalty(mut self, penalty_points: i32) -> Self {
        self.penalty_points = penalty_points;
        self
    }

    /// Match history as a slice, if one was supplied.
    pub fn history(&self) -> Option<&[MatchResult]> {
        self.matches.as_deref()
    }
}

/// A player paired with their computed score (one row of the ranking).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Standing<'a> {
    pub player: &'a Player,
    pub score: u32,
}
