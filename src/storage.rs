//! User-scoped key/value persistence.
//!
//! Values are whole JSON documents per key; a write replaces the key
//! entirely, so a failed write never leaves a partially updated value.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

/// Error type for storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// IO error reading/writing the backing file
    Io(std::io::Error),
    /// Backing file is not a JSON object
    Json(serde_json::Error),
    /// Write rejected by the backend
    Rejected(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::Rejected(s) => write!(f, "Write rejected: {}", s),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Whole-value key/value store.
pub trait KeyValueStore {
    /// Read a key. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Overwrite a key.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Store backed by a single JSON object on disk.
///
/// The file is read once on open; every `set` rewrites the whole file
/// through a temporary sibling and a rename.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: Map<String, Value>,
}

impl JsonFileStore {
    /// Open the store, treating a missing file as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file missing, starting empty");
                Map::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(path = %path.display(), keys = data.len(), "Opened store");
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, data: &Map<String, Value>) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)?,
            _ => {}
        }

        let content = serde_json::to_string_pretty(data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut next = self.data.clone();
        next.insert(key.to_owned(), value);
        self.write(&next)?;
        self.data = next;
        debug!(key, path = %self.path.display(), "Persisted key");
        Ok(())
    }
}

/// In-memory store, optionally rejecting writes.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<String, Value>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail with [`StorageError::Rejected`].
    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Rejected(key.to_owned()));
        }
        self.data.insert(key.to_owned(), value);
        Ok(())
    }
}
