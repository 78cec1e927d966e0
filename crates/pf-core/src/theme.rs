//! Dark-mode preference
//!
//! The only state the page persists. Storage failures never block the
//! toggle: the preference still flips for the session and the failure is
//! logged.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Where the preference lives between sessions
pub trait PreferenceStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<bool>>;

    fn save(&self, dark_mode: bool) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    dark_mode: bool,
}

/// Preference kept in a small JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Result<Option<bool>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let stored: StoredPreference = serde_json::from_str(&contents)?;
        Ok(Some(stored.dark_mode))
    }

    fn save(&self, dark_mode: bool) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&StoredPreference { dark_mode })?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-process store, for tests and embedders without a filesystem
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RwLock<Option<bool>>,
}

impl MemoryStore {
    pub fn with_value(dark_mode: bool) -> Self {
        Self {
            value: RwLock::new(Some(dark_mode)),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<bool>> {
        Ok(*self.value.read())
    }

    fn save(&self, dark_mode: bool) -> Result<()> {
        *self.value.write() = Some(dark_mode);
        Ok(())
    }
}

/// The dark-mode flag and its backing store
pub struct ThemePreference {
    dark_mode: bool,
    store: Box<dyn PreferenceStore>,
}

impl ThemePreference {
    /// Load the stored preference, defaulting to light mode
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        Self::load_with_fallback(store, false)
    }

    /// Load the stored preference, using `fallback` (e.g. the system theme)
    /// when nothing is stored or the store cannot be read
    pub fn load_with_fallback(store: Box<dyn PreferenceStore>, fallback: bool) -> Self {
        let dark_mode = match store.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => fallback,
            Err(e) => {
                warn!("Could not read theme preference: {}", e);
                fallback
            }
        };
        debug!("Theme preference: dark_mode={}", dark_mode);
        Self { dark_mode, store }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Flip the preference and persist it. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        if let Err(e) = self.store.save(self.dark_mode) {
            warn!("Could not save theme preference: {}", e);
        }
        self.dark_mode
    }
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("dark_mode", &self.dark_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<bool>> {
            Err(PortfolioError::Config("unreadable".to_string()))
        }

        fn save(&self, _dark_mode: bool) -> Result<()> {
            Err(PortfolioError::Config("read-only".to_string()))
        }
    }

    #[test]
    fn test_defaults_to_light() {
        let theme = ThemePreference::load(Box::new(MemoryStore::default()));
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_toggle_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("theme.json");

        let mut theme = ThemePreference::load(Box::new(JsonFileStore::new(&path)));
        assert!(theme.toggle());

        let reloaded = ThemePreference::load(Box::new(JsonFileStore::new(&path)));
        assert!(reloaded.is_dark());
    }

    #[test]
    fn test_stored_value_beats_fallback() {
        let theme = ThemePreference::load_with_fallback(Box::new(MemoryStore::with_value(false)), true);
        assert!(!theme.is_dark());

        let theme = ThemePreference::load_with_fallback(Box::new(MemoryStore::default()), true);
        assert!(theme.is_dark());
    }

    #[test]
    fn test_store_failures_degrade() {
        let mut theme = ThemePreference::load_with_fallback(Box::new(BrokenStore), true);
        assert!(theme.is_dark());
        assert!(!theme.toggle());
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_err());
        assert!(!ThemePreference::load(Box::new(store)).is_dark());
    }
}
