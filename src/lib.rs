// Library interface for podium
// This allows integration tests to access internal modules

pub mod errors;
pub mod remote;
pub mod season;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use errors::PodiumError;
pub use remote::{HttpSeasonSource, SeasonSource};
pub use season::{
    CorrelatedRace, Driver, Race, Season, SeasonResolver, SelectedSeasonCache,
    correlate_champion_wins,
};
pub use theme::{Theme, ThemeStore};
