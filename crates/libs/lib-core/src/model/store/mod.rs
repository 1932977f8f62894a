//! # Key-Value Store
//!
//! Storage abstraction behind the favorites list.
//!
//! [`KeyValueStorage`] is the raw medium (browser `localStorage` in the web
//! client, [`MemoryStorage`] in tests). [`FavoritesStore`] is the typed view
//! the UI talks to, implemented over any medium by [`JsonFavoritesStore`].
//!
//! Writes replace the whole value of a key. Nothing coordinates writers in
//! different tabs: the last write wins.

// region: --- Modules
pub mod favorites;
// endregion: --- Modules

// region: --- Re-exports
pub use favorites::{FavoritesStore, JsonFavoritesStore, FAVORITE_MARKETS_KEY};
// endregion: --- Re-exports

// region: --- Types and Functions
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{AppError, Result};

/// Synchronous string key-value medium.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process [`KeyValueStorage`].
///
/// Clones share the same map, which lets tests hand the "same browser
/// storage" to several store handles.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every write, like a browser with storage quota
    /// exhausted.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Raw value under `key`, bypassing the typed store.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(AppError::Storage(format!("cannot write {}: storage is read-only", key)));
        }
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
// endregion: --- Types and Functions
