//! History persistence
//!
//! A small key-value capability plus the JSON codec for the history record.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

use crate::history::{History, HistoryEntry};

/// Key the history record is stored under.
pub const HISTORY_KEY: &str = "passwordHistory";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access store: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed history record: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),
}

/// Flat string key-value storage.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, mainly for tests and hosts without disk access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first save.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Keys must be plain names: no path separators, not `.` or `..`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let plain = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && Path::new(key).components().count() == 1;
        if !plain {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

/// On-disk shape of a history entry.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    id: String,
    password: String,
    /// RFC 3339 / ISO-8601 on disk.
    timestamp: DateTime<Utc>,
    length: usize,
    strength: String,
}

impl From<&HistoryEntry> for StoredEntry {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id.clone(),
            password: entry.password.expose_secret().to_string(),
            timestamp: entry.created_at,
            length: entry.length,
            strength: entry.strength.clone(),
        }
    }
}

impl From<StoredEntry> for HistoryEntry {
    fn from(stored: StoredEntry) -> Self {
        Self {
            id: stored.id,
            password: SecretString::new(stored.password.into()),
            created_at: stored.timestamp,
            length: stored.length,
            strength: stored.strength,
        }
    }
}

/// Serializes the history, oldest first, as a JSON array.
pub fn encode_history(history: &History) -> Result<String, StoreError> {
    let stored: Vec<StoredEntry> = history.entries().iter().map(StoredEntry::from).collect();
    Ok(serde_json::to_string(&stored)?)
}

pub fn decode_history(raw: &str) -> Result<History, StoreError> {
    let stored: Vec<StoredEntry> = serde_json::from_str(raw)?;
    Ok(History::from_entries(
        stored.into_iter().map(HistoryEntry::from).collect(),
    ))
}

/// Loads the history stored under `key`.
///
/// A missing record yields an empty history. A malformed one is discarded
/// and also yields an empty history; only read failures are errors.
pub fn load_history<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<History, StoreError> {
    let Some(raw) = store.load(key)? else {
        return Ok(History::new());
    };

    match decode_history(&raw) {
        Ok(history) => {
            #[cfg(feature = "tracing")]
            tracing::info!("History restored: {} entries", history.len());
            Ok(history)
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Discarding malformed history record: {}", _e);
            Ok(History::new())
        }
    }
}

pub fn save_history<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    history: &History,
) -> Result<(), StoreError> {
    let raw = encode_history(history)?;
    store.save(key, &raw)?;

    #[cfg(feature = "tracing")]
    tracing::debug!("History saved: {} entries", history.len());

    Ok(())
}
