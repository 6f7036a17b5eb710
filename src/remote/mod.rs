pub(crate) mod http;
pub(crate) mod worker;

pub use http::HttpSeasonSource;
pub use worker::{FetchRequest, FetchResponse, spawn_fetch_worker};

use crate::errors::PodiumError;
use crate::season::{Race, Season};

/// Read operations exposed by the remote season/race API. The dashboard
/// only depends on this contract; tests substitute an in-memory source.
pub trait SeasonSource {
    /// All known seasons.
    fn list_seasons(&self) -> impl Future<Output = Result<Vec<Season>, PodiumError>>;

    /// One season by year. Fails with `SeasonNotFound` for unknown years.
    fn get_season(&self, year: u16) -> impl Future<Output = Result<Season, PodiumError>>;

    /// All races for a season year, ordered by round ascending. An empty
    /// list is a valid result, not an error.
    fn list_races(&self, year: u16) -> impl Future<Output = Result<Vec<Race>, PodiumError>>;
}
