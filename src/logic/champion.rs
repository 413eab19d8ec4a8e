//! Champion selection: the top-ranked player, if their score is strictly positive.

use crate::logic::ranking::TournamentRanking;
use crate::logic::score::{ScoreCalculator, StandardScoreCalculator};
use crate::models::{Player, ScoringError, Standing};

impl<C: ScoreCalculator> TournamentRanking<C> {
    /// The champion with their score, or `None` when nobody scored above zero
    /// (empty field, everyone disqualified, or every score wiped by penalties).
    ///
    /// A missing player collection is still an error, as for the ranking.
    pub fn get_champion<'a>(
        &self,
        players: Option<&'a [Player]>,
    ) -> Result<Option<Standing<'a>>, ScoringError> {
        Ok(champion_of(&self.standings(players)?))
    }
}

/// Pick the champion from standings already sorted best first.
pub fn champion_of<'a>(standings: &[Standing<'a>]) -> Option<Standing<'a>> {
    let champion = standings.first().copied().filter(|top| top.score > 0);
    match &champion {
        Some(top) => log::info!("Champion: {} ({} pts)", top.player.name, top.score),
        None => log::info!("No champion: no player has a positive score"),
    }
    champion
}

/// Pick the champion with the standard calculator.
pub fn get_champion(players: Option<&[Player]>) -> Result<Option<&Player>, ScoringError> {
    Ok(TournamentRanking::<StandardScoreCalculator>::default()
        .get_champion(players)?
        .map(|s| s.player))
}
