//! Per-axis favorite codes.
//!
//! Favorites only affect display order; they never restrict which values are
//! valid. The list order is the favorite priority.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::catalog::{self, Axis, DEFAULT_FAVORITES};
use crate::storage::{KeyValueStore, StorageError};

/// Storage key for favorites.
pub const FAVORITES_KEY: &str = "favorites";

/// Favorite codes per axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Favorites {
    pub hl: Vec<String>,
    pub gl: Vec<String>,
    pub lr: Vec<String>,
    pub cr: Vec<String>,
}

impl Favorites {
    /// The built-in favorites table.
    pub fn builtin() -> Self {
        let mut favorites = Self::default();
        for (axis, codes) in DEFAULT_FAVORITES {
            *favorites.get_mut(axis) = codes.iter().map(|c| c.to_string()).collect();
        }
        favorites
    }

    pub fn get(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Hl => &self.hl,
            Axis::Gl => &self.gl,
            Axis::Lr => &self.lr,
            Axis::Cr => &self.cr,
        }
    }

    fn get_mut(&mut self, axis: Axis) -> &mut Vec<String> {
        match axis {
            Axis::Hl => &mut self.hl,
            Axis::Gl => &mut self.gl,
            Axis::Lr => &mut self.lr,
            Axis::Cr => &mut self.cr,
        }
    }

    pub fn contains(&self, axis: Axis, code: &str) -> bool {
        self.get(axis).iter().any(|c| c == code)
    }

    /// Remove the first occurrence of `code`, or append it if absent.
    ///
    /// Returns whether `code` is a favorite afterwards.
    pub fn toggle(&mut self, axis: Axis, code: &str) -> bool {
        let list = self.get_mut(axis);
        match list.iter().position(|c| c == code) {
            Some(idx) => {
                list.remove(idx);
                false
            }
            None => {
                list.push(code.to_owned());
                true
            }
        }
    }

    /// Read a persisted value, dropping axes that are not string lists.
    pub fn from_value(value: &Value) -> Self {
        let mut favorites = Self::default();
        let Some(object) = value.as_object() else {
            warn!("Stored favorites are not an object, ignoring");
            return favorites;
        };

        for axis in Axis::ALL {
            let Some(entry) = object.get(axis.key()) else {
                continue;
            };
            match entry.as_array() {
                Some(items) => {
                    *favorites.get_mut(axis) = items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_owned))
                        .collect();
                }
                None => warn!(axis = axis.key(), "Stored favorites axis is malformed, ignoring"),
            }
        }

        favorites
    }

    fn to_value(&self) -> Result<Value, StorageError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Favorites loaded for one session.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    favorites: Favorites,
}

impl FavoritesStore {
    /// Load favorites, seeding and persisting `defaults` when none are stored.
    ///
    /// A failed seed write is logged and the defaults are used from memory;
    /// the next successful toggle persists them.
    pub fn load(store: &mut dyn KeyValueStore, defaults: &Favorites) -> Result<Self, StorageError> {
        let favorites = match store.get(FAVORITES_KEY)? {
            Some(value) => Favorites::from_value(&value),
            None => {
                info!("No stored favorites, seeding defaults");
                let seeded = defaults.clone();
                if let Err(e) = store.set(FAVORITES_KEY, seeded.to_value()?) {
                    warn!(error = %e, "Failed to persist default favorites");
                }
                seeded
            }
        };

        Ok(Self { favorites })
    }

    /// Toggle a favorite and persist.
    ///
    /// If the write fails the in-memory change is kept and the error returned.
    pub fn toggle(
        &mut self,
        store: &mut dyn KeyValueStore,
        axis: Axis,
        code: &str,
    ) -> Result<bool, StorageError> {
        let now_favorite = self.favorites.toggle(axis, code);
        info!(axis = axis.key(), code, now_favorite, "Toggled favorite");
        store.set(FAVORITES_KEY, self.favorites.to_value()?)?;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, axis: Axis, code: &str) -> bool {
        self.favorites.contains(axis, code)
    }

    pub fn list(&self, axis: Axis) -> &[String] {
        self.favorites.get(axis)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Order codes for display: favorites first in favorite order, then the
    /// rest in their given order.
    pub fn prioritize<'a>(&self, axis: Axis, codes: &[&'a str]) -> Vec<&'a str> {
        let favorites = self.list(axis);
        let mut ordered: Vec<&'a str> = favorites
            .iter()
            .filter_map(|fav| codes.iter().copied().find(|code| *code == fav.as_str()))
            .collect();
        ordered.extend(codes.iter().copied().filter(|code| !self.is_favorite(axis, code)));
        ordered
    }

    /// Catalog rows for an axis in display order.
    pub fn catalog_rows(&self, axis: Axis) -> Vec<CatalogRow> {
        let codes: Vec<&'static str> = catalog::entries(axis).iter().map(|e| e.code).collect();
        let mut rows: Vec<CatalogRow> = self
            .prioritize(axis, &codes)
            .into_iter()
            .map(|code| CatalogRow {
                code: code.to_owned(),
                name: catalog::display_name(axis, code).map(str::to_owned),
                favorite: self.is_favorite(axis, code),
            })
            .collect();

        // Favorites outside the catalog still show, after the known favorites
        let custom = self
            .list(axis)
            .iter()
            .filter(|code| !catalog::is_known(axis, code))
            .map(|code| CatalogRow {
                code: code.clone(),
                name: None,
                favorite: true,
            });
        let split = rows.iter().take_while(|row| row.favorite).count();
        rows.splice(split..split, custom);

        rows
    }
}

/// One selectable code as shown in a picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    pub code: String,
    pub name: Option<String>,
    pub favorite: bool,
}
