//! Standings CLI: score a roster, print the ranking and the champion.
//! Run with: cargo run --bin standings -- [ROSTER] [--json]
//! With no roster, prints a built-in sample run.
//! Override with env: ROSTER (path), ROSTER_FORMAT (json or csv; default from the file extension).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::ExitCode;
use tournament_scoring::{
    champion_of, load_roster_csv, load_roster_json, MatchOutcome, Player, RosterError,
    StandardScoreCalculator, Standing, TournamentRanking,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RosterFormat {
    Json,
    Csv,
}

impl RosterFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(RosterFormat::Json),
            "csv" => Some(RosterFormat::Csv),
            _ => None,
        }
    }

    fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::parse)
            .unwrap_or(RosterFormat::Json)
    }
}

#[derive(serde::Serialize)]
struct StandingsReport<'a> {
    standings: &'a [Standing<'a>],
    champion: Option<&'a str>,
}

fn sample_players() -> Vec<Player> {
    use MatchOutcome::*;
    vec![
        Player::new("Alice")
            .with_outcomes([Win, Win, Win])
            .with_penalty(1),
        Player::new("Bob").with_outcomes([Win, Draw, Loss]),
        Player::new("Charlie")
            .with_outcomes([Draw, Draw, Draw])
            .disqualified(),
    ]
}

fn load_players(path: &Path) -> Result<Vec<Player>, RosterError> {
    let format = std::env::var("ROSTER_FORMAT")
        .ok()
        .and_then(|f| RosterFormat::parse(&f))
        .unwrap_or_else(|| RosterFormat::from_path(path));
    log::info!("Reading {:?} roster from {}", format, path.display());
    let reader = BufReader::new(File::open(path)?);
    match format {
        RosterFormat::Json => load_roster_json(reader),
        RosterFormat::Csv => load_roster_csv(reader),
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let roster = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .or_else(|| std::env::var("ROSTER").ok());

    let players = match roster {
        Some(path) => match load_players(Path::new(&path)) {
            Ok(players) => players,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::info!("No roster given, using the sample players");
            sample_players()
        }
    };

    let ranking = TournamentRanking::new(StandardScoreCalculator::new());
    let standings = match ranking.standings(Some(players.as_slice())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Could not rank players: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let champion = champion_of(&standings).map(|s| s.player.name.as_str());

    if as_json {
        let report = StandingsReport {
            standings: &standings,
            champion,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Could not serialize standings: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Ranking:");
    for s in &standings {
        let note = if s.player.is_disqualified { " (disqualified)" } else { "" };
        println!("- {}: {} pts{}", s.player.name, s.score, note);
    }
    println!("\nChampion: {}", champion.unwrap_or("none"));
    ExitCode::SUCCESS
}
