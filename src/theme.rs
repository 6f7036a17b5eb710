// Theme preference persistence

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::PodiumError;

const THEME_FILE_NAME: &str = "theme.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Persisted display preference with three-tier resolution: an explicitly
/// saved value wins, then the host's ambient dark-mode signal, then light.
pub struct ThemeStore {
    theme_path: Option<PathBuf>,
}

impl ThemeStore {
    pub fn new(theme_path: PathBuf) -> Self {
        Self {
            theme_path: Some(theme_path),
        }
    }

    pub fn new_default() -> Self {
        Self {
            theme_path: dirs::config_dir().map(|dir| dir.join("podium").join(THEME_FILE_NAME)),
        }
    }

    /// Never fails: a missing or unreadable file falls through to the
    /// ambient signal, an absent ambient signal falls through to light.
    pub fn load(&self, prefers_dark: Option<bool>) -> Theme {
        if let Some(path) = &self.theme_path {
            if path.exists() {
                match std::fs::File::open(path) {
                    Ok(file) => match serde_json::from_reader(file) {
                        Ok(theme) => return theme,
                        Err(e) => warn!("Could not parse theme file: {e}"),
                    },
                    Err(e) => warn!("Could not open theme file: {e}"),
                }
            }
        }

        if prefers_dark == Some(true) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Returns the opposite theme and persists it best-effort: the UI
    /// reflects the returned value whether or not the write succeeded.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.opposite();
        if let Err(e) = self.persist(next) {
            warn!("Could not persist theme preference: {e}");
        }
        next
    }

    fn persist(&self, theme: Theme) -> Result<(), PodiumError> {
        let path = self.theme_path.as_ref().ok_or(PodiumError::NoConfigDir)?;

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| PodiumError::ThemeIOError { source: e })?;
            }
        }

        let file =
            std::fs::File::create(path).map_err(|e| PodiumError::ThemeIOError { source: e })?;
        serde_json::to_writer(file, &theme)
            .map_err(|e| PodiumError::ThemeSerializeError { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_to_light_without_state() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join(THEME_FILE_NAME));
        assert_eq!(store.load(None), Theme::Light);
        assert_eq!(store.load(Some(false)), Theme::Light);
    }

    #[test]
    fn test_ambient_signal_used_when_nothing_persisted() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join(THEME_FILE_NAME));
        assert_eq!(store.load(Some(true)), Theme::Dark);
    }

    #[test]
    fn test_persisted_value_wins_over_ambient_signal() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join(THEME_FILE_NAME));

        let toggled = store.toggle(Theme::Light);
        assert_eq!(toggled, Theme::Dark);
        assert_eq!(store.load(Some(false)), Theme::Dark);
    }

    #[test]
    fn test_double_toggle_round_trips_and_persists_last() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join(THEME_FILE_NAME));

        let once = store.toggle(Theme::Light);
        let twice = store.toggle(once);
        assert_eq!(twice, Theme::Light);
        // the last persisted value is the original one
        assert_eq!(store.load(Some(true)), Theme::Light);
    }

    #[test]
    fn test_corrupt_file_falls_through_to_ambient() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(THEME_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        let store = ThemeStore::new(path);
        assert_eq!(store.load(Some(true)), Theme::Dark);
        assert_eq!(store.load(None), Theme::Light);
    }

    #[test]
    fn test_persistence_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // parent of the theme path is a file, so the write must fail
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let store = ThemeStore::new(blocker.join(THEME_FILE_NAME));
        assert_eq!(store.toggle(Theme::Dark), Theme::Light);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Theme::Light.opposite(), Theme::Dark);
        assert_eq!(Theme::Dark.opposite(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
