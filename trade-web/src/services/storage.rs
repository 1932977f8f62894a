//! `localStorage` backend for the favorites store.

use lib_core::{AppError, KeyValueStorage, Result};
use web_sys::Storage;

/// [`KeyValueStorage`] over `window.localStorage`.
///
/// Storage is looked up on every call; private browsing modes can make it
/// unavailable, which surfaces as [`AppError::Storage`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage(&self) -> Result<Storage> {
        gloo_utils::window()
            .local_storage()
            .map_err(|e| AppError::Storage(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.local_storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("read {}: {:?}", key, e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("write {}: {:?}", key, e)))
    }
}
