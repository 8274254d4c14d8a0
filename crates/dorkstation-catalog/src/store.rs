//! Key/value persistence for front-end state.
//!
//! Values are stored as JSON text under short keys; a value that is missing
//! or no longer parses falls back to the caller's initial value.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::templates::Category;

pub mod keys {
    pub const FAVORITES: &str = "favorites_v2";
    pub const COMMUNITY_PACKS: &str = "community_packs_v1";
    pub const COLLECTIONS: &str = "collections_v1";
    pub const LAST_STATE: &str = "last_state_v2";
    pub const PREFERENCES: &str = "preferences_v1";
    pub const BUILDER: &str = "builder_v1";
}

pub trait StateStore: Send + Sync {
    fn load_raw(&self, key: &str) -> Result<Option<String>, CatalogError>;
    fn save_raw(&self, key: &str, raw: &str) -> Result<(), CatalogError>;
}

fn check_key(key: &str) -> Result<(), CatalogError> {
    let ok = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok { Ok(()) } else { Err(CatalogError::InvalidKey(key.to_string())) }
}

/// One `<key>.json` file per key under `dir`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CatalogError> {
        check_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StateStore for FileStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, CatalogError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), CatalogError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, raw)?;
        debug!(path = %path.display(), bytes = raw.len(), "state saved");
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, CatalogError> {
        check_key(key)?;
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw: &str) -> Result<(), CatalogError> {
        check_key(key)?;
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

/// Load `key`, returning `initial` when it is absent, unreadable or stale.
pub fn load_json<T: DeserializeOwned>(store: &dyn StateStore, key: &str, initial: T) -> T {
    let raw = match store.load_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return initial,
        Err(e) => {
            warn!(key, error = %e, "could not read stored state");
            return initial;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "stored state did not parse; using defaults");
            initial
        }
    }
}

pub fn save_json<T: Serialize + ?Sized>(store: &dyn StateStore, key: &str, value: &T) -> Result<(), CatalogError> {
    let raw = serde_json::to_string_pretty(value)?;
    store.save_raw(key, &raw)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub engine: String,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { engine: "google".to_string(), theme: Theme::System }
    }
}

/// The keyword and category the user last worked with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastState {
    pub q: String,
    pub category: Category,
}

impl Default for LastState {
    fn default() -> Self {
        Self { q: String::new(), category: Category::Person }
    }
}
