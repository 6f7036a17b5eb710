// Champion/race-winner cross-reference

use log::warn;

use crate::season::{Race, Season};

/// A race annotated with whether its winner is the season champion.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelatedRace {
    pub race: Race,
    pub is_champion_win: bool,
}

/// Derives the champion identity for a season: the embedded winner's driver
/// id takes precedence, the legacy `winner_driver_id` field is the fallback.
/// When both are present and disagree the record is inconsistent; the
/// disagreement is logged and precedence still applies.
pub fn champion_identity(season: &Season) -> Option<&str> {
    let embedded = season.winner.as_ref().map(|driver| driver.driver_id.as_str());
    let legacy = season.winner_driver_id.as_deref();

    if let (Some(embedded_id), Some(legacy_id)) = (embedded, legacy) {
        if embedded_id != legacy_id {
            warn!(
                "Inconsistent champion identity for season {}: embedded winner is {} but winnerDriverId is {}",
                season.year, embedded_id, legacy_id
            );
        }
    }

    embedded.or(legacy)
}

/// Flags every race won by the season champion. Pure: preserves race order
/// and count, performs no dedup of repeated rounds, and never fails. A
/// season with no derivable champion identity flags every race `false`;
/// that is a displayable state, not an error.
pub fn correlate_champion_wins(season: &Season, races: Vec<Race>) -> Vec<CorrelatedRace> {
    let champion = champion_identity(season);

    races
        .into_iter()
        .map(|race| {
            let is_champion_win = match (race.winner_driver_id.as_deref(), champion) {
                (Some(winner), Some(champion)) => winner == champion,
                _ => false,
            };
            CorrelatedRace {
                race,
                is_champion_win,
            }
        })
        .collect()
}
