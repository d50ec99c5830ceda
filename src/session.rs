//! One interaction's worth of state.
//!
//! A [`Session`] owns the store and the favorites and presets read from it.
//! It is opened once per command, mutated in place and dropped at exit; two
//! sessions writing concurrently resolve as last write wins.

use tracing::info;

use crate::catalog::Axis;
use crate::cycler;
use crate::derive::ParamState;
use crate::favorites::{CatalogRow, Favorites, FavoritesStore};
use crate::params::ParamSet;
use crate::presets::{Preset, PresetError, PresetStore};
use crate::storage::{KeyValueStore, StorageError};

pub struct Session {
    store: Box<dyn KeyValueStore>,
    favorites: FavoritesStore,
    presets: PresetStore,
}

impl Session {
    /// Load favorites (seeding `default_favorites` on first use) and presets.
    pub fn open(
        mut store: Box<dyn KeyValueStore>,
        default_favorites: &Favorites,
    ) -> Result<Self, StorageError> {
        let favorites = FavoritesStore::load(store.as_mut(), default_favorites)?;
        let presets = PresetStore::load(store.as_ref())?;
        info!(presets = presets.len(), "Session opened");

        Ok(Self {
            store,
            favorites,
            presets,
        })
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn presets(&self) -> &PresetStore {
        &self.presets
    }

    /// Toggle a favorite. Returns whether `code` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, axis: Axis, code: &str) -> Result<bool, StorageError> {
        self.favorites.toggle(self.store.as_mut(), axis, code)
    }

    pub fn is_favorite(&self, axis: Axis, code: &str) -> bool {
        self.favorites.is_favorite(axis, code)
    }

    /// Known codes for an axis, favorites first.
    pub fn catalog(&self, axis: Axis) -> Vec<CatalogRow> {
        self.favorites.catalog_rows(axis)
    }

    pub fn create_preset(&mut self, name: &str, params: ParamSet) -> Result<Preset, PresetError> {
        self.presets.create(self.store.as_mut(), name, params)
    }

    /// Parameters of a stored preset; `None` for unknown ids.
    pub fn apply_preset(&self, id: &str) -> Option<ParamSet> {
        self.presets.apply(id)
    }

    pub fn delete_preset(&mut self, id: &str) -> Result<bool, StorageError> {
        self.presets.delete(self.store.as_mut(), id)
    }

    pub fn list_presets(&self) -> &[Preset] {
        self.presets.list()
    }

    /// The preset to switch to from `current`.
    pub fn cycle(&self, current: &ParamSet) -> Preset {
        let list = cycler::preset_list(self.presets.list());
        cycler::next_preset(&list, current)
            .cloned()
            .unwrap_or_else(cycler::default_preset)
    }

    pub fn derive_param_state(&self, params: &ParamSet) -> ParamState {
        ParamState::from_params(params)
    }
}
