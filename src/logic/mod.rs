//! Tournament scoring logic: per-player score, ranking, champion, roster loading.

mod champion;
mod ranking;
mod roster;
mod score;

pub use champion::{champion_of, get_champion};
pub use ranking::{compare_names, get_ranking, TournamentRanking};
pub use roster::{load_roster_csv, load_roster_json, parse_outcomes};
pub use score::{
    apply_penalty, base_score, calculate_score, streak_bonus, ScoreCalculator, ScoringRules,
    StandardScoreCalculator,
};
