// Navigation-scoped carrier for the season picked from the list view

use std::sync::Mutex;

use crate::season::Season;

/// Single-slot holder for the most recently selected season. The list view
/// writes it on selection, the detail view reads it on mount to skip a
/// redundant fetch. In-memory only: a process restart always forces a
/// remote fetch.
#[derive(Debug, Default)]
pub struct SelectedSeasonCache {
    slot: Mutex<Option<Season>>,
}

impl SelectedSeasonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current slot unconditionally.
    pub fn set(&self, season: Season) {
        *self.lock_slot() = Some(season);
    }

    /// Returns a copy of the value present at call time. Never fails.
    pub fn get(&self) -> Option<Season> {
        self.lock_slot().clone()
    }

    /// Empties the slot. Used when leaving the season context entirely.
    pub fn clear(&self) {
        *self.lock_slot() = None;
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<Season>> {
        // a poisoned lock only means a writer panicked mid-replace; the
        // slot value itself is always whole
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(year: u16) -> Season {
        Season {
            year,
            url: format!("https://example.com/seasons/{year}"),
            winner: None,
            winner_driver_id: Some("1".to_string()),
        }
    }

    #[test]
    fn test_empty_cache_returns_none() {
        let cache = SelectedSeasonCache::new();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_set_then_get_returns_value() {
        let cache = SelectedSeasonCache::new();
        cache.set(season(2023));
        assert_eq!(cache.get().map(|s| s.year), Some(2023));
    }

    #[test]
    fn test_set_overwrites_previous_selection() {
        let cache = SelectedSeasonCache::new();
        cache.set(season(2022));
        cache.set(season(2023));
        assert_eq!(cache.get().map(|s| s.year), Some(2023));
    }

    #[test]
    fn test_clear_empties_slot() {
        let cache = SelectedSeasonCache::new();
        cache.set(season(2023));
        cache.clear();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_get_is_repeatable() {
        let cache = SelectedSeasonCache::new();
        cache.set(season(2023));
        assert_eq!(cache.get(), cache.get());
    }
}
