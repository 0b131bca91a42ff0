//! Typed accessors over a [`PreferenceStore`].
//!
//! Reads never fail: a storage error or a malformed value is logged and
//! treated as absent. Writes return the storage error to the caller.

use std::sync::Arc;

use okaeri_core::{FeatureFlags, PreferenceKeys};
use serde_json::Value;

use crate::error::StoreError;
use crate::store::PreferenceStore;

/// Favorites, last-selected location and feature flags bound to one store
/// and one set of key names.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
    keys: PreferenceKeys,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

impl Preferences {
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>, keys: PreferenceKeys) -> Self {
        Self { store, keys }
    }

    async fn read(&self, key: &str) -> Option<Value> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "preference read failed; treating as absent");
                None
            }
        }
    }

    /// Load the ordered favorites list.
    ///
    /// Non-string entries are skipped; a non-array value reads as empty.
    pub async fn load_favorites(&self) -> Vec<String> {
        let key = self.keys.favorites.as_str();
        match self.read(key).await {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    other => {
                        tracing::warn!(key, entry = %other, "skipping malformed favorite entry");
                        None
                    }
                })
                .collect(),
            Some(other) => {
                tracing::warn!(key, value = %other, "favorites is not a list; treating as empty");
                Vec::new()
            }
        }
    }

    /// Persist the favorites list in the given order.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`StoreError`] if the write fails.
    pub async fn save_favorites(&self, favorites: &[String]) -> Result<(), StoreError> {
        let value = serde_json::to_value(favorites).map_err(|e| StoreError::Encode {
            key: self.keys.favorites.clone(),
            source: e,
        })?;
        self.store.set(&self.keys.favorites, value).await
    }

    /// Re-read favorites, add or remove `value`, and persist the result.
    ///
    /// Not atomic across stores shared by several selectors: the last write wins.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`StoreError`] if the write fails.
    pub async fn toggle_favorite(&self, value: &str) -> Result<Vec<String>, StoreError> {
        let mut favorites = self.load_favorites().await;
        let added = toggle_in_place(&mut favorites, value);
        self.save_favorites(&favorites).await?;
        tracing::debug!(value, added, count = favorites.len(), "favorite toggled");
        Ok(favorites)
    }

    /// Load the last selected option value. Empty strings read as absent.
    pub async fn load_last_selected(&self) -> Option<String> {
        let key = self.keys.last_selected.as_str();
        match self.read(key).await {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            None | Some(Value::Null | Value::String(_)) => None,
            Some(other) => {
                tracing::warn!(key, value = %other, "last selection is not a string; ignoring");
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns the underlying [`StoreError`] if the write fails.
    pub async fn save_last_selected(&self, value: &str) -> Result<(), StoreError> {
        self.store
            .set(&self.keys.last_selected, Value::String(value.to_string()))
            .await
    }

    /// Load feature flags, merging a stored partial object over the defaults.
    pub async fn load_feature_flags(&self) -> FeatureFlags {
        let key = self.keys.feature_flags.as_str();
        match self.read(key).await {
            None | Some(Value::Null) => FeatureFlags::default(),
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::warn!(key, error = %e, "malformed feature flags; using defaults");
                FeatureFlags::default()
            }),
        }
    }

    /// # Errors
    ///
    /// Returns the underlying [`StoreError`] if the write fails.
    pub async fn save_feature_flags(&self, flags: &FeatureFlags) -> Result<(), StoreError> {
        let value = serde_json::to_value(flags).map_err(|e| StoreError::Encode {
            key: self.keys.feature_flags.clone(),
            source: e,
        })?;
        self.store.set(&self.keys.feature_flags, value).await
    }
}

/// Remove `value` if present, otherwise append it. Returns `true` if it was added.
///
/// Relative order of the remaining entries is preserved.
pub fn toggle_in_place(favorites: &mut Vec<String>, value: &str) -> bool {
    if let Some(index) = favorites.iter().position(|f| f == value) {
        favorites.remove(index);
        false
    } else {
        favorites.push(value.to_string());
        true
    }
}
