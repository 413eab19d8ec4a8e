//! Tournament scoring: library with models and ranking logic.

pub mod logic;
pub mod models;

pub use logic::{
    apply_penalty, base_score, calculate_score, champion_of, compare_names, get_champion,
    get_ranking, load_roster_csv, load_roster_json, parse_outcomes, streak_bonus,
    ScoreCalculator, ScoringRules, StandardScoreCalculator, TournamentRanking,
};
pub use models::{
    ErrorKind, MatchOutcome, MatchResult, Player, PlayerId, RosterError, ScoringError, Standing,
};
