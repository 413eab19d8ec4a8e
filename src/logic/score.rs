//! Score calculation: base points, win-streak bonus, penalty clamp, disqualification.

use crate::models::{MatchOutcome, MatchResult, Player, ScoringError};
use serde::{Deserialize, Serialize};

/// Point values used by [`StandardScoreCalculator`].
///
/// Every field has a serde default, so a rules file may override just one value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    #[serde(default = "default_win_points")]
    pub win_points: u32,
    #[serde(default = "default_draw_points")]
    pub draw_points: u32,
    #[serde(default)]
    pub loss_points: u32,
    /// Consecutive wins needed for each bonus. 0 disables the bonus.
    #[serde(default = "default_streak_length")]
    pub streak_length: u32,
    #[serde(default = "default_streak_bonus")]
    pub streak_bonus: u32,
}

fn default_win_points() -> u32 {
    3
}

fn default_draw_points() -> u32 {
    1
}

fn default_streak_length() -> u32 {
    3
}

fn default_streak_bonus() -> u32 {
    5
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            win_points: default_win_points(),
            draw_points: default_draw_points(),
            loss_points: 0,
            streak_length: default_streak_length(),
            streak_bonus: default_streak_bonus(),
        }
    }
}

impl ScoringRules {
    pub fn points_for(&self, outcome: MatchOutcome) -> u32 {
        match outcome {
            MatchOutcome::Win => self.win_points,
            MatchOutcome::Draw => self.draw_points,
            MatchOutcome::Loss => self.loss_points,
        }
    }

    /// Points from outcomes only. Saturates at `u32::MAX`.
    pub fn base_points(&self, matches: &[MatchResult]) -> u32 {
        matches
            .iter()
            .map(|m| self.points_for(m.outcome))
            .fold(0u32, u32::saturating_add)
    }

    /// Bonus only: one `streak_bonus` at every `streak_length`-th consecutive win of
    /// each unbroken run. The counter keeps growing past the threshold, so the next
    /// bonus lands at 2x, 3x ... the streak length. Saturates at `u32::MAX`.
    pub fn bonus_points(&self, matches: &[MatchResult]) -> u32 {
        if self.streak_length == 0 {
            return 0;
        }
        let mut bonus = 0u32;
        let mut consecutive_wins = 0u32;
        for m in matches {
            if m.outcome == MatchOutcome::Win {
                consecutive_wins += 1;
                if consecutive_wins % self.streak_length == 0 {
                    bonus = bonus.saturating_add(self.streak_bonus);
                }
            } else {
                consecutive_wins = 0;
            }
        }
        bonus
    }
}

/// Computes a single player's score. Implementations must be pure: same input, same score.
pub trait ScoreCalculator {
    /// Score a chronological match history.
    ///
    /// Fails with [`ScoringError::MissingMatches`] when `matches` is `None` and with
    /// [`ScoringError::NegativePenalty`] when `penalty_points < 0`. A disqualified
    /// player scores exactly 0.
    fn calculate_score(
        &self,
        matches: Option<&[MatchResult]>,
        is_disqualified: bool,
        penalty_points: i32,
    ) -> Result<u32, ScoringError>;

    /// Score a player from their own history, flag and penalty.
    fn score_player(&self, player: &Player) -> Result<u32, ScoringError> {
        self.calculate_score(
            player.history(),
            player.is_disqualified,
            player.penalty_points,
        )
    }
}

/// The standard tournament scoring: 3/1/0 points and +5 for every third consecutive win.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StandardScoreCalculator {
    rules: ScoringRules,
}

impl StandardScoreCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ScoringRules) -> Self {
        Self { rules }
    }
}

impl ScoreCalculator for StandardScoreCalculator {
    fn calculate_score(
        &self,
        matches: Option<&[MatchResult]>,
        is_disqualified: bool,
        penalty_points: i32,
    ) -> Result<u32, ScoringError> {
        let matches = matches.ok_or(ScoringError::MissingMatches)?;
        let penalty =
            u32::try_from(penalty_points).map_err(|_| ScoringError::NegativePenalty(penalty_points))?;
        if is_disqualified {
            return Ok(0);
        }

        let score = self
            .rules
            .base_points(matches)
            .saturating_add(self.rules.bonus_points(matches));
        Ok(apply_penalty(score, penalty))
    }
}

/// Points from outcomes only (no bonus, no penalty), using the standard rules.
pub fn base_score(matches: &[MatchResult]) -> u32 {
    ScoringRules::default().base_points(matches)
}

/// Bonus only: +5 at every third consecutive win of each unbroken run.
pub fn streak_bonus(matches: &[MatchResult]) -> u32 {
    ScoringRules::default().bonus_points(matches)
}

/// Subtract penalty points, never going below zero.
pub fn apply_penalty(score: u32, penalty_points: u32) -> u32 {
    score.saturating_sub(penalty_points)
}

/// Score a history with the standard calculator.
pub fn calculate_score(
    matches: Option<&[MatchResult]>,
    is_disqualified: bool,
    penalty_points: i32,
) -> Result<u32, ScoringError> {
    StandardScoreCalculator::new().calculate_score(matches, is_disqualified, penalty_points)
}
