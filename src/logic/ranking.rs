//! Ranking: order players by score (descending), ties broken by name ignoring case.

use crate::logic::score::{ScoreCalculator, StandardScoreCalculator};
use crate::models::{Player, ScoringError, Standing};
use std::cmp::Ordering;

/// Ranking utilities on top of an injected [`ScoreCalculator`].
#[derive(Clone, Debug, Default)]
pub struct TournamentRanking<C = StandardScoreCalculator> {
    calculator: C,
}

impl<C: ScoreCalculator> TournamentRanking<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    /// Score every player and return them best first, each with its score.
    ///
    /// 1. Reject a missing player collection (an empty one yields an empty ranking).
    /// 2. Score each player; the first bad record aborts the whole ranking.
    /// 3. Sort by score descending, then name ascending (case-insensitive).
    ///    Names that compare equal keep their input order.
    pub fn standings<'a>(
        &self,
        players: Option<&'a [Player]>,
    ) -> Result<Vec<Standing<'a>>, ScoringError> {
        let players = players.ok_or(ScoringError::MissingPlayers)?;

        let mut standings = players
            .iter()
            .map(|player| -> Result<Standing<'a>, ScoringError> {
                let score = self.calculator.score_player(player).map_err(|e| {
                    log::warn!("Rejected player record '{}': {}", player.name, e);
                    e
                })?;
                log::debug!("Scored '{}': {} pts", player.name, score);
                Ok(Standing { player, score })
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        standings.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| compare_names(&a.player.name, &b.player.name))
        });
        Ok(standings)
    }

    /// Players ordered best first. Same cardinality as the input.
    pub fn get_ranking<'a>(
        &self,
        players: Option<&'a [Player]>,
    ) -> Result<Vec<&'a Player>, ScoringError> {
        Ok(self
            .standings(players)?
            .into_iter()
            .map(|s| s.player)
            .collect())
    }
}

/// Ordinal comparison ignoring case, one char at a time.
///
/// Only one-to-one case mappings apply: `'ß'` stays `'ß'` rather than becoming `"SS"`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars().map(simple_uppercase).cmp(b.chars().map(simple_uppercase))
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Rank players with the standard calculator.
pub fn get_ranking(players: Option<&[Player]>) -> Result<Vec<&Player>, ScoringError> {
    TournamentRanking::<StandardScoreCalculator>::default().get_ranking(players)
}
