//! Integration tests for score calculation: points, streak bonus, penalties, disqualification.

use tournament_scoring::{
    apply_penalty, base_score, calculate_score, parse_outcomes, streak_bonus, ErrorKind,
    MatchResult, ScoreCalculator, ScoringError, ScoringRules, StandardScoreCalculator,
};

fn history(codes: &str) -> Vec<MatchResult> {
    parse_outcomes(codes).unwrap()
}

fn score(codes: &str) -> u32 {
    calculate_score(Some(history(codes).as_slice()), false, 0).unwrap()
}

#[test]
fn empty_history_scores_zero() {
    assert_eq!(calculate_score(Some(&[][..]), false, 0), Ok(0));
}

#[test]
fn base_points_without_bonus() {
    assert_eq!(score("WDL"), 4);
    assert_eq!(score("WW"), 6);
    assert_eq!(score("DDD"), 3);
    assert_eq!(score("LL"), 0);
    assert_eq!(score("WWD"), 7);
}

#[test]
fn three_wins_earn_one_bonus() {
    assert_eq!(score("WWW"), 14);
    assert_eq!(score("WWWD"), 15);
}

#[test]
fn four_wins_earn_one_bonus_only() {
    assert_eq!(score("WWWW"), 17);
}

#[test]
fn six_wins_earn_two_bonuses() {
    assert_eq!(score("WWWWWW"), 28);
    assert_eq!(score("WWWWWWWWW"), 42);
}

#[test]
fn broken_streak_gets_no_bonus() {
    assert_eq!(score("WWLW"), 9);
    assert_eq!(score("WDWW"), 10);
}

#[test]
fn each_new_run_earns_its_own_bonus() {
    assert_eq!(score("WWWLWWW"), 28);
    assert_eq!(score("WWWLWWWW"), 31);
    assert_eq!(score("WDWWWL"), 18);
}

#[test]
fn long_tournament_awards_bonus_per_run() {
    let codes = "WWWDL".repeat(20);
    // 20 runs of 10 base points, each run earns one bonus
    assert_eq!(score(&codes), 300);
}

#[test]
fn disqualified_player_scores_zero() {
    let matches = history("WWWWWW");
    assert_eq!(calculate_score(Some(matches.as_slice()), true, 0), Ok(0));
    assert_eq!(calculate_score(Some(matches.as_slice()), true, 7), Ok(0));
    assert_eq!(calculate_score(Some(&[][..]), true, 0), Ok(0));
}

#[test]
fn penalties_are_subtracted() {
    assert_eq!(calculate_score(Some(history("WWW").as_slice()), false, 4), Ok(10));
    assert_eq!(calculate_score(Some(history("WWWD").as_slice()), false, 3), Ok(12));
}

#[test]
fn penalties_clamp_at_zero() {
    assert_eq!(calculate_score(Some(history("D").as_slice()), false, 10), Ok(0));
    assert_eq!(calculate_score(Some(history("WDD").as_slice()), false, 8), Ok(0));
    assert_eq!(calculate_score(Some(history("WWD").as_slice()), false, 7), Ok(0));
}

#[test]
fn missing_matches_is_rejected() {
    let err = calculate_score(None, false, 0).unwrap_err();
    assert_eq!(err, ScoringError::MissingMatches);
    assert_eq!(err.kind(), ErrorKind::MissingRequiredCollection);
    // Checked before disqualification and penalty.
    assert!(matches!(
        calculate_score(None, true, -1),
        Err(ScoringError::MissingMatches)
    ));
}

#[test]
fn negative_penalty_is_rejected() {
    let err = calculate_score(Some(history("W").as_slice()), false, -1).unwrap_err();
    assert_eq!(err, ScoringError::NegativePenalty(-1));
    assert_eq!(err.kind(), ErrorKind::InvalidNegativeValue);
    // Rejected even for a disqualified player.
    assert!(matches!(
        calculate_score(Some(&[][..]), true, -5),
        Err(ScoringError::NegativePenalty(-5))
    ));
}

#[test]
fn score_is_never_negative_and_matches_components() {
    let cases = ["", "W", "WWW", "WWWWWWW", "LDLDW", "WWWDLWWWWWWL", "DDDDDD"];
    for codes in cases {
        let matches = history(codes);
        for penalty in [0u32, 1, 5, 14, 100] {
            let total = calculate_score(Some(matches.as_slice()), false, penalty as i32).unwrap();
            let expected = apply_penalty(base_score(&matches) + streak_bonus(&matches), penalty);
            assert_eq!(total, expected, "history {codes:?}, penalty {penalty}");
        }
    }
}

#[test]
fn component_helpers() {
    assert_eq!(base_score(&history("WDLW")), 7);
    assert_eq!(base_score(&[]), 0);
    assert_eq!(streak_bonus(&history("WDWL")), 0);
    assert_eq!(streak_bonus(&history("WWW")), 5);
    assert_eq!(streak_bonus(&history("WWWWWW")), 10);
    assert_eq!(streak_bonus(&history("WWWDWWW")), 10);
    assert_eq!(apply_penalty(20, 5), 15);
    assert_eq!(apply_penalty(4, 10), 0);
}

#[test]
fn custom_rules() {
    let no_bonus = StandardScoreCalculator::with_rules(ScoringRules {
        streak_length: 0,
        ..ScoringRules::default()
    });
    assert_eq!(no_bonus.calculate_score(Some(history("WWWWWW").as_slice()), false, 0), Ok(18));

    let rules: ScoringRules = serde_json::from_str(r#"{"win_points": 2, "streak_length": 2}"#).unwrap();
    assert_eq!(rules.draw_points, 1);
    assert_eq!(rules.streak_bonus, 5);
    let calc = StandardScoreCalculator::with_rules(rules);
    // 2+2+5 +2+2+5 +1
    assert_eq!(calc.calculate_score(Some(history("WWWWD").as_slice()), false, 0), Ok(19));
}

#[test]
fn huge_bonus_saturates_instead_of_overflowing() {
    let rules = ScoringRules {
        streak_bonus: u32::MAX,
        ..ScoringRules::default()
    };
    let matches = history("WWWWWW");
    assert_eq!(rules.bonus_points(&matches), u32::MAX);
    assert_eq!(rules.base_points(&matches), 18);
    let calc = StandardScoreCalculator::with_rules(rules);
    assert_eq!(calc.calculate_score(Some(matches.as_slice()), false, 0), Ok(u32::MAX));
    assert_eq!(
        calc.calculate_score(Some(matches.as_slice()), false, 10),
        Ok(u32::MAX - 10)
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        ScoringError::MissingMatches.to_string(),
        "The list of matches cannot be missing"
    );
    assert_eq!(
        ScoringError::NegativePenalty(-3).to_string(),
        "Penalty points cannot be negative (got -3)"
    );
}
