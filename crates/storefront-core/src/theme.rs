//! Dark-mode preference.
//!
//! Stored as a JSON boolean (`"true"` / `"false"`) under a fixed key. Anything
//! else, including an absent key, reads back as light mode.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Presentation mode threaded through the UI context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    #[default]
    Light,
    Dark,
}

impl PresentationMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value for the document `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Reads and writes the persisted dark-mode flag.
#[derive(Debug, Clone, Copy)]
pub struct ThemePreference<'a> {
    key: &'a str,
}

impl<'a> ThemePreference<'a> {
    pub fn new(key: &'a str) -> Self {
        Self { key }
    }

    /// Read the stored mode, falling back to light on any failure.
    pub fn load(&self, store: &impl KeyValueStore) -> PresentationMode {
        match self.try_load(store) {
            Ok(Some(dark)) => PresentationMode::from_dark(dark),
            Ok(None) => PresentationMode::Light,
            Err(err) => {
                tracing::debug!(key = self.key, %err, "ignoring stored theme");
                PresentationMode::Light
            }
        }
    }

    /// Read the stored flag, surfacing storage and parse failures.
    pub fn try_load(&self, store: &impl KeyValueStore) -> Result<Option<bool>, StorageError> {
        match store.get(self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str::<bool>(&raw)?)),
            None => Ok(None),
        }
    }

    /// Persist `mode` as a JSON boolean.
    pub fn save(
        &self,
        store: &impl KeyValueStore,
        mode: PresentationMode,
    ) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&mode.is_dark())?;
        store.set(self.key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryStore;

    const KEY: &str = "darkMode";

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        let pref = ThemePreference::new(KEY);

        pref.save(&store, PresentationMode::Dark).unwrap();
        // Fresh reader, same backing store
        assert_eq!(ThemePreference::new(KEY).load(&store), PresentationMode::Dark);

        pref.save(&store, PresentationMode::Light).unwrap();
        assert_eq!(pref.load(&store), PresentationMode::Light);
    }

    #[test]
    fn test_absent_reads_light() {
        let store = MemoryStore::new();
        assert_eq!(ThemePreference::new(KEY).load(&store), PresentationMode::Light);

        store.set(KEY, "true").unwrap();
        store.remove(KEY).unwrap();
        assert_eq!(ThemePreference::new(KEY).load(&store), PresentationMode::Light);
    }

    #[test]
    fn test_malformed_reads_light() {
        let store = MemoryStore::new();
        let pref = ThemePreference::new(KEY);
        for raw in ["", "yes", "\"true\"", "1", "{", "null"] {
            store.set(KEY, raw).unwrap();
            assert_eq!(pref.load(&store), PresentationMode::Light, "raw = {raw:?}");
        }
        store.set(KEY, "not json").unwrap();
        assert!(matches!(pref.try_load(&store), Err(StorageError::Codec(_))));
    }

    #[test]
    fn test_unavailable_store_reads_light() {
        let store = MemoryStore::new();
        store.fail_reads(true);
        assert_eq!(ThemePreference::new(KEY).load(&store), PresentationMode::Light);
    }

    #[test]
    fn test_write_is_idempotent() {
        let store = MemoryStore::new();
        let pref = ThemePreference::new(KEY);

        pref.save(&store, PresentationMode::Dark).unwrap();
        let first = store.get(KEY).unwrap();
        pref.save(&store, PresentationMode::Dark).unwrap();
        assert_eq!(store.get(KEY).unwrap(), first);
        assert_eq!(first.as_deref(), Some("true"));
    }

    #[test]
    fn test_mode_helpers() {
        assert_eq!(PresentationMode::default(), PresentationMode::Light);
        assert_eq!(PresentationMode::Light.toggled(), PresentationMode::Dark);
        assert_eq!(PresentationMode::Dark.toggled(), PresentationMode::Light);
        assert_eq!(PresentationMode::from_dark(true).as_str(), "dark");
        assert!(!PresentationMode::Light.is_dark());
    }
}
