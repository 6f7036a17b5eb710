// Season resolution state machines for the detail view
//
// Both fetch paths the detail view depends on (the season record and the
// per-season race list) share the same shape: a request is tagged with the
// year and a generation counter when it is issued, and a completion is only
// committed when the tag still matches the current request. Rapid
// navigation between years therefore never lets a stale response overwrite
// state for the newly requested year.

use crate::errors::PodiumError;
use crate::season::{Race, Season};

/// Tag carried by an in-flight fetch so its completion can be matched
/// against the request that is currently wanted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    year: u16,
    generation: u64,
}

impl FetchTicket {
    pub fn year(&self) -> u16 {
        self.year
    }
}

#[derive(Debug, Default)]
pub enum ResolveState {
    #[default]
    Idle,
    Pending,
    Resolved(Season),
    Failed(PodiumError),
}

/// Decides whether the detail view can reuse the season carried over from
/// the list view or has to fetch it again.
///
/// A remote fetch is required if and only if there is no cached season for
/// the requested year, or the cached season is thin (no champion identity).
/// A complete cached season resolves immediately with no network call;
/// avoiding that duplicate fetch is the point of this type.
///
/// States move `Idle -> Pending -> {Resolved | Failed}`. Re-entering with
/// the same year is a no-op; a different year starts a fresh evaluation.
#[derive(Debug, Default)]
pub struct SeasonResolver {
    year: Option<u16>,
    generation: u64,
    state: ResolveState,
}

impl SeasonResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(&self) -> Option<u16> {
        self.year
    }

    pub fn state(&self) -> &ResolveState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ResolveState::Pending)
    }

    /// Starts resolution for `year`. Returns `None` when no fetch is needed:
    /// either the cached season for that year is complete (state is
    /// immediately `Resolved` with the cached value) or an evaluation for
    /// that year is already underway or terminal. Returns a ticket to fetch
    /// with otherwise.
    pub fn begin(&mut self, year: u16, cached: Option<Season>) -> Option<FetchTicket> {
        if self.year == Some(year) && !matches!(self.state, ResolveState::Idle) {
            return None;
        }
        self.year = Some(year);

        match cached {
            Some(season) if season.year == year && season.is_complete() => {
                self.state = ResolveState::Resolved(season);
                None
            }
            _ => {
                // cache miss, or a thin record from a degraded list
                // response: the fetched season must supersede it
                self.generation += 1;
                self.state = ResolveState::Pending;
                Some(FetchTicket {
                    year,
                    generation: self.generation,
                })
            }
        }
    }

    /// Applies a fetch completion. Returns `false` when the ticket no
    /// longer matches the current request (the viewed year changed while
    /// the fetch was in flight) and the result was discarded.
    pub fn commit(
        &mut self,
        ticket: FetchTicket,
        result: Result<Season, PodiumError>,
    ) -> bool {
        if self.year != Some(ticket.year)
            || self.generation != ticket.generation
            || !matches!(self.state, ResolveState::Pending)
        {
            return false;
        }
        self.state = match result {
            Ok(season) => ResolveState::Resolved(season),
            Err(error) => ResolveState::Failed(error),
        };
        true
    }

    /// Back to `Idle`, used when leaving the detail view.
    pub fn reset(&mut self) {
        self.year = None;
        self.state = ResolveState::Idle;
    }
}

#[derive(Debug, Default)]
pub enum RaceListState {
    #[default]
    Idle,
    Pending,
    /// An empty list is a valid loaded state: a season with no races yet
    Loaded(Vec<Race>),
    Failed(PodiumError),
}

/// Ticketed holder for the per-season race list fetch. Same discard rule as
/// the resolver, without a cache tier: the race list is always fetched.
#[derive(Debug, Default)]
pub struct RaceListSlot {
    year: Option<u16>,
    generation: u64,
    state: RaceListState,
}

impl RaceListSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RaceListState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RaceListState::Pending)
    }

    /// Starts the race list fetch for `year`, unless one for that year is
    /// already underway or terminal.
    pub fn begin(&mut self, year: u16) -> Option<FetchTicket> {
        if self.year == Some(year) && !matches!(self.state, RaceListState::Idle) {
            return None;
        }
        self.year = Some(year);
        self.generation += 1;
        self.state = RaceListState::Pending;
        Some(FetchTicket {
            year,
            generation: self.generation,
        })
    }

    /// Applies a fetch completion, discarding it when stale.
    pub fn commit(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Race>, PodiumError>,
    ) -> bool {
        if self.year != Some(ticket.year)
            || self.generation != ticket.generation
            || !matches!(self.state, RaceListState::Pending)
        {
            return false;
        }
        self.state = match result {
            Ok(races) => RaceListState::Loaded(races),
            Err(error) => RaceListState::Failed(error),
        };
        true
    }

    pub fn reset(&mut self) {
        self.year = None;
        self.state = RaceListState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Driver;

    fn complete_season(year: u16) -> Season {
        Season {
            year,
            url: format!("https://example.com/seasons/{year}"),
            winner: Some(Driver {
                driver_id: "1".to_string(),
                permanent_number: None,
                code: Some("VER".to_string()),
                url: None,
                given_name: "Max".to_string(),
                family_name: "Verstappen".to_string(),
                date_of_birth: None,
                nationality: "Dutch".to_string(),
            }),
            winner_driver_id: None,
        }
    }

    fn thin_season(year: u16) -> Season {
        Season {
            year,
            url: format!("https://example.com/seasons/{year}"),
            winner: None,
            winner_driver_id: None,
        }
    }

    #[test]
    fn test_complete_cached_season_resolves_without_fetch() {
        let mut resolver = SeasonResolver::new();
        let ticket = resolver.begin(2023, Some(complete_season(2023)));

        assert!(ticket.is_none());
        match resolver.state() {
            ResolveState::Resolved(season) => assert_eq!(season.year, 2023),
            state => panic!("expected Resolved, got {state:?}"),
        }
    }

    #[test]
    fn test_no_cache_requires_fetch() {
        let mut resolver = SeasonResolver::new();
        let ticket = resolver.begin(2023, None);

        assert_eq!(ticket.map(|t| t.year()), Some(2023));
        assert!(resolver.is_pending());
    }

    #[test]
    fn test_thin_cached_season_requires_fetch_and_is_superseded() {
        let mut resolver = SeasonResolver::new();
        let ticket = resolver
            .begin(2023, Some(thin_season(2023)))
            .expect("thin cache must trigger a fetch");

        assert!(resolver.is_pending());
        assert!(resolver.commit(ticket, Ok(complete_season(2023))));
        match resolver.state() {
            ResolveState::Resolved(season) => assert!(season.is_complete()),
            state => panic!("expected Resolved, got {state:?}"),
        }
    }

    #[test]
    fn test_cached_season_for_other_year_is_ignored() {
        let mut resolver = SeasonResolver::new();
        let ticket = resolver.begin(2023, Some(complete_season(2022)));

        assert!(ticket.is_some());
        assert!(resolver.is_pending());
    }

    #[test]
    fn test_fetch_failure_reaches_failed_state() {
        let mut resolver = SeasonResolver::new();
        let ticket = resolver.begin(2023, None).unwrap();

        assert!(resolver.commit(ticket, Err(PodiumError::SeasonNotFound { year: 2023 })));
        match resolver.state() {
            ResolveState::Failed(error) => assert!(error.is_not_found()),
            state => panic!("expected Failed, got {state:?}"),
        }
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut resolver = SeasonResolver::new();
        let stale = resolver.begin(2022, None).unwrap();
        let current = resolver.begin(2023, None).unwrap();

        assert!(!resolver.commit(stale, Ok(complete_season(2022))));
        assert!(resolver.is_pending());

        assert!(resolver.commit(current, Ok(complete_season(2023))));
        match resolver.state() {
            ResolveState::Resolved(season) => assert_eq!(season.year, 2023),
            state => panic!("expected Resolved, got {state:?}"),
        }
    }

    #[test]
    fn test_reentering_same_year_is_noop() {
        let mut resolver = SeasonResolver::new();
        let ticket = resolver.begin(2023, None).unwrap();
        assert!(resolver.begin(2023, None).is_none());

        assert!(resolver.commit(ticket, Ok(complete_season(2023))));
        // no backward transition to Pending for the same year
        assert!(resolver.begin(2023, None).is_none());
        assert!(matches!(resolver.state(), ResolveState::Resolved(_)));
    }

    #[test]
    fn test_fresh_year_after_resolve_starts_over() {
        let mut resolver = SeasonResolver::new();
        let ticket = resolver.begin(2022, None).unwrap();
        assert!(resolver.commit(ticket, Ok(complete_season(2022))));

        assert!(resolver.begin(2023, None).is_some());
        assert!(resolver.is_pending());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut resolver = SeasonResolver::new();
        resolver.begin(2023, None);
        resolver.reset();

        assert!(matches!(resolver.state(), ResolveState::Idle));
        assert_eq!(resolver.year(), None);
        assert!(resolver.begin(2023, None).is_some());
    }

    #[test]
    fn test_race_list_slot_loads_and_discards_stale() {
        let mut slot = RaceListSlot::new();
        let stale = slot.begin(2022).unwrap();
        let current = slot.begin(2023).unwrap();

        assert!(!slot.commit(stale, Ok(Vec::new())));
        assert!(slot.is_pending());

        assert!(slot.commit(current, Ok(Vec::new())));
        match slot.state() {
            RaceListState::Loaded(races) => assert!(races.is_empty()),
            state => panic!("expected Loaded, got {state:?}"),
        }
    }

    #[test]
    fn test_race_list_slot_same_year_is_noop_while_pending() {
        let mut slot = RaceListSlot::new();
        assert!(slot.begin(2023).is_some());
        assert!(slot.begin(2023).is_none());
    }
}
