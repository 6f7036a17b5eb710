pub(crate) mod cache;
pub(crate) mod correlator;
pub(crate) mod resolver;

pub use cache::SelectedSeasonCache;
pub use correlator::{CorrelatedRace, champion_identity, correlate_champion_wins};
pub use resolver::{FetchTicket, RaceListSlot, RaceListState, ResolveState, SeasonResolver};

use serde::{Deserialize, Serialize};

/// A driver as reported by the remote source. Immutable value once fetched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: String,
    pub permanent_number: Option<String>,
    /// Short code, e.g. VER for Verstappen
    pub code: Option<String>,
    /// Public profile page
    pub url: Option<String>,
    pub given_name: String,
    pub family_name: String,
    pub date_of_birth: Option<String>,
    pub nationality: String,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

/// One yearly championship. Identity is the year. The record may arrive
/// "thin" (no champion identity) from a degraded list response, in which
/// case the resolver replaces it with a freshly fetched copy before any
/// correlation runs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub year: u16,
    pub url: String,
    /// The driver who won the season
    pub winner: Option<Driver>,
    /// Legacy champion reference kept by older season records that carry no
    /// embedded driver
    pub winner_driver_id: Option<String>,
}

impl Season {
    /// A season is complete when a champion identity can be derived from it,
    /// either from the embedded winner or from the legacy id field.
    pub fn is_complete(&self) -> bool {
        champion_identity(self).is_some()
    }
}

/// One event within a season. Identity is (season year, round). Round
/// uniqueness is not enforced upstream and is not assumed here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: String,
    /// The season year
    pub season: u16,
    /// 1-based round number within the season
    pub round: u32,
    pub race_name: String,
    pub circuit_name: String,
    pub date: String,
    pub time: Option<String>,
    pub url: Option<String>,
    pub winner_driver_id: Option<String>,
    pub winner_driver: Option<Driver>,
}

impl Race {
    pub fn winner_name(&self) -> Option<String> {
        self.winner_driver.as_ref().map(Driver::full_name)
    }
}
