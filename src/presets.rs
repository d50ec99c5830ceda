//! Named, saved bundles of all four parameter values.
//!
//! Presets persist as a JSON object keyed by id, in insertion order:
//!
//! ```json
//! { "1718000000000": { "name": "US English", "params": { "hl": "en", "gl": "us", "lr": "", "cr": "" } } }
//! ```
//!
//! Advanced values are stored pre-encoded, exactly as they appear in the URL.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::params::ParamSet;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key for presets.
pub const PRESETS_KEY: &str = "presets";

/// Error type for preset operations.
#[derive(Debug)]
pub enum PresetError {
    /// Name is empty after trimming
    EmptyName,
    /// Persisting the collection failed; the in-memory collection was reverted
    Storage(StorageError),
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Preset name cannot be empty"),
            Self::Storage(e) => write!(f, "Failed to save presets: {}", e),
        }
    }
}

impl std::error::Error for PresetError {}

impl From<StorageError> for PresetError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

/// A saved preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub params: ParamSet,
}

/// Persisted shape of one preset (the id is the object key).
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreset {
    name: String,
    #[serde(default)]
    params: ParamSet,
}

/// Presets loaded for one session.
#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    presets: Vec<Preset>,
}

impl PresetStore {
    /// Load presets, skipping malformed entries.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let Some(value) = store.get(PRESETS_KEY)? else {
            return Ok(Self::default());
        };
        Ok(Self::from_value(&value))
    }

    /// Read a persisted collection.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            warn!("Stored presets are not an object, ignoring");
            return Self::default();
        };

        let presets = object
            .iter()
            .filter_map(|(id, entry)| {
                match serde_json::from_value::<StoredPreset>(entry.clone()) {
                    Ok(stored) => Some(Preset {
                        id: id.clone(),
                        name: stored.name,
                        params: stored.params,
                    }),
                    Err(e) => {
                        warn!(id = %id, error = %e, "Skipping malformed preset");
                        None
                    }
                }
            })
            .collect();

        Self { presets }
    }

    fn to_value(&self) -> Result<Value, StorageError> {
        let mut object = Map::new();
        for preset in &self.presets {
            let stored = StoredPreset {
                name: preset.name.clone(),
                params: preset.params.clone(),
            };
            object.insert(preset.id.clone(), serde_json::to_value(stored)?);
        }
        Ok(Value::Object(object))
    }

    /// Write the collection, restoring `previous` if the write fails.
    fn persist(
        &mut self,
        store: &mut dyn KeyValueStore,
        previous: Vec<Preset>,
    ) -> Result<(), StorageError> {
        let result = self
            .to_value()
            .and_then(|value| store.set(PRESETS_KEY, value));
        if let Err(e) = result {
            warn!(error = %e, "Persisting presets failed, reverting");
            self.presets = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Save a new preset under a freshly generated id.
    pub fn create(
        &mut self,
        store: &mut dyn KeyValueStore,
        name: &str,
        params: ParamSet,
    ) -> Result<Preset, PresetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }

        let preset = Preset {
            id: self.generate_id(),
            name: name.to_owned(),
            params,
        };

        let previous = self.presets.clone();
        self.presets.push(preset.clone());
        self.persist(store, previous)?;

        info!(id = %preset.id, name = %preset.name, "Created preset");
        Ok(preset)
    }

    /// Parameters of a preset, or `None` for an unknown id.
    pub fn apply(&self, id: &str) -> Option<ParamSet> {
        self.find(id).map(|preset| preset.params.clone())
    }

    /// Remove a preset. Returns `Ok(false)` without writing if `id` is unknown.
    pub fn delete(&mut self, store: &mut dyn KeyValueStore, id: &str) -> Result<bool, StorageError> {
        let Some(idx) = self.presets.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        let previous = self.presets.clone();
        let removed = self.presets.remove(idx);
        self.persist(store, previous)?;

        info!(id, name = %removed.name, "Deleted preset");
        Ok(true)
    }

    /// Presets in insertion order.
    pub fn list(&self) -> &[Preset] {
        &self.presets
    }

    pub fn find(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Milliseconds since the epoch, bumped past ids already in this store.
    fn generate_id(&self) -> String {
        let mut candidate = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        while self.find(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}
