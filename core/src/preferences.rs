//! Persisted string preferences and the dark-mode setting built on them.
//!
//! All storage access goes through [`PreferenceStore`]; the rest of the
//! console only ever sees [`DarkModeSetting::load`] and
//! [`DarkModeSetting::set`].

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;
use tracing::warn;

use crate::error::PreferenceError;

pub const PREFERENCES_FILENAME: &str = "preferences.json";
pub const DARK_MODE_KEY: &str = "darkMode";

pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
    /// Drop every stored preference.
    fn clear(&self) -> Result<(), PreferenceError>;
}

/// JSON object of string values stored in a single file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(home: &Path) -> Self {
        Self {
            path: home.join(PREFERENCES_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match fs::read(&self.path) {
            Ok(data) => serde_json::from_slice(&data).map_err(|source| PreferenceError::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let data = serde_json::to_vec_pretty(values)?;
        fs::write(&self.path, data).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.read()?;
        values.insert(key.to_string(), value.to_string());
        self.write(&values)
    }

    fn clear(&self) -> Result<(), PreferenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }
}

/// Process-local store, used by tests and when no home directory is
/// available.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), PreferenceError> {
        self.values.lock().clear();
        Ok(())
    }
}

/// The single persisted boolean preference. Stored as `"true"`/`"false"`;
/// anything else, including absence, reads as `false`.
#[derive(Clone)]
pub struct DarkModeSetting {
    store: Arc<dyn PreferenceStore>,
}

impl DarkModeSetting {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> bool {
        match self.store.get(DARK_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                warn!("failed to read dark mode preference: {err}");
                false
            }
        }
    }

    /// Persist the full value; there is no read-modify-write.
    pub fn set(&self, enabled: bool) -> Result<(), PreferenceError> {
        debug!(enabled, "persisting dark mode preference");
        self.store
            .set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }
}

impl std::fmt::Debug for DarkModeSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DarkModeSetting").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path());
        assert_eq!(store.get(DARK_MODE_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(&dir.path().join("nested"));
        store.set(DARK_MODE_KEY, "true").unwrap();
        store.set("other", "x").unwrap();

        let reopened = FilePreferenceStore::new(&dir.path().join("nested"));
        assert_eq!(reopened.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));

        reopened.clear().unwrap();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap(), None);
        reopened.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_a_parse_error_and_reads_as_light() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path());
        fs::write(store.path(), b"not json").unwrap();

        assert!(matches!(
            store.get(DARK_MODE_KEY),
            Err(PreferenceError::Parse { .. })
        ));
        assert!(!DarkModeSetting::new(Arc::new(store)).load());
    }

    #[test]
    fn only_literal_true_enables_dark_mode() {
        let store = Arc::new(MemoryPreferenceStore::default());
        let setting = DarkModeSetting::new(store.clone());
        assert!(!setting.load());

        for (raw, expected) in [("true", true), ("false", false), ("TRUE", false), ("1", false)] {
            store.set(DARK_MODE_KEY, raw).unwrap();
            assert_eq!(setting.load(), expected, "raw value {raw:?}");
        }
    }

    #[test]
    fn set_writes_full_value() {
        let store = Arc::new(MemoryPreferenceStore::default());
        let setting = DarkModeSetting::new(store.clone());
        setting.set(true).unwrap();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
        setting.set(false).unwrap();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
    }
}
