//! Roster loading from JSON or CSV.
//!
//! CSV rosters use the header `name,matches,disqualified,penalty_points`, with the
//! match history written as a string of `W`/`D`/`L` codes in the order played.
//! A blank `disqualified` or `penalty_points` cell means `false` / `0`.

use crate::models::{MatchOutcome, MatchResult, Player, RosterError};
use serde::Deserialize;
use std::io::Read;

/// One CSV row before validation.
#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    matches: String,
    #[serde(default)]
    disqualified: Option<bool>,
    #[serde(default)]
    penalty_points: Option<i32>,
}

/// Parse a string of W/D/L codes into a chronological history. Whitespace is ignored.
pub fn parse_outcomes(codes: &str) -> Result<Vec<MatchResult>, RosterError> {
    codes
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            MatchOutcome::from_code(c)
                .map(MatchResult::new)
                .ok_or(RosterError::InvalidOutcome(c))
        })
        .collect()
}

/// Read a JSON array of players. A player without a `matches` field keeps `None`,
/// so the calculator can report it.
pub fn load_roster_json<R: Read>(reader: R) -> Result<Vec<Player>, RosterError> {
    let mut players: Vec<Player> = serde_json::from_reader(reader)?;
    for p in &mut players {
        p.name = validated_name(&p.name)?;
    }
    log::info!("Loaded {} player(s) from JSON roster", players.len());
    Ok(players)
}

/// Read a CSV roster. An empty `matches` cell is an empty history.
pub fn load_roster_csv<R: Read>(reader: R) -> Result<Vec<Player>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut players = Vec::new();
    for row in rdr.deserialize() {
        let row: RosterRow = row?;
        let matches = parse_outcomes(&row.matches)?;
        let mut player = Player::new(validated_name(&row.name)?);
        player.matches = Some(matches);
        player.is_disqualified = row.disqualified.unwrap_or(false);
        player.penalty_points = row.penalty_points.unwrap_or(0);
        players.push(player);
    }
    log::info!("Loaded {} player(s) from CSV roster", players.len());
    Ok(players)
}

fn validated_name(name: &str) -> Result<String, RosterError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RosterError::EmptyName);
    }
    Ok(trimmed.to_string())
}
