//! # Favorite Markets Store
//!
//! The user's favorite markets, kept as a JSON array of market descriptors
//! under [`FAVORITE_MARKETS_KEY`].
//!
//! Mutations are expressed against a snapshot of the list the caller holds:
//! the caller passes what it currently believes the list to be, gets the new
//! list back, and that new list is written over the stored value. A caller
//! working from a stale snapshot therefore overwrites newer writes, and
//! [`add_favorite`] appends without checking membership. Both behaviours are
//! deliberate and covered by tests.
//!
//! ```rust
//! use lib_core::model::store::{favorites, JsonFavoritesStore, FavoritesStore, MemoryStorage};
//! use shared::dto::market::MarketConfig;
//!
//! let store = JsonFavoritesStore::new(MemoryStorage::new());
//! let sol = MarketConfig::new("SOL-PERP", "SOL", 3);
//!
//! let list = favorites::toggle_favorite(&store, &store.get(), &sol).unwrap();
//! assert!(favorites::contains(&list, "SOL-PERP"));
//! assert_eq!(store.get(), list);
//! ```

use shared::dto::market::MarketConfig;
use tracing::{debug, warn};

use super::KeyValueStorage;
use crate::error::Result;

/// Storage key of the favorites list.
pub const FAVORITE_MARKETS_KEY: &str = "favoriteMarkets";

/// Typed access to the persisted favorites list.
pub trait FavoritesStore {
    /// Current list, in insertion order. Unreadable or malformed values read
    /// as the empty list.
    fn get(&self) -> Vec<MarketConfig>;

    /// Replace the stored list.
    fn set(&self, markets: &[MarketConfig]) -> Result<()>;
}

/// [`FavoritesStore`] serializing to JSON over a [`KeyValueStorage`].
#[derive(Clone, Copy, Debug)]
pub struct JsonFavoritesStore<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStorage> JsonFavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, FAVORITE_MARKETS_KEY)
    }

    pub fn with_key(storage: S, key: &'static str) -> Self {
        Self { storage, key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<S: KeyValueStorage> FavoritesStore for JsonFavoritesStore<S> {
    fn get(&self) -> Vec<MarketConfig> {
        let raw = match self.storage.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = self.key, error = %e, "favorites unreadable, using empty list");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<MarketConfig>>(&raw) {
            Ok(markets) => markets,
            Err(e) => {
                warn!(key = self.key, error = %e, "favorites malformed, using empty list");
                Vec::new()
            }
        }
    }

    fn set(&self, markets: &[MarketConfig]) -> Result<()> {
        let json = serde_json::to_string(markets)?;
        self.storage.set_item(self.key, &json)?;
        debug!(key = self.key, count = markets.len(), "favorites written");
        Ok(())
    }
}

/// Membership is decided by market name.
pub fn contains(favorites: &[MarketConfig], name: &str) -> bool {
    favorites.iter().any(|m| m.name == name)
}

/// Append `market` to `current` and persist the result.
///
/// No membership check is made: adding a market that is already present
/// produces a duplicate entry.
pub fn add_favorite<S: FavoritesStore>(
    store: &S,
    current: &[MarketConfig],
    market: &MarketConfig,
) -> Result<Vec<MarketConfig>> {
    let mut next = current.to_vec();
    next.push(market.clone());
    store.set(&next)?;
    Ok(next)
}

/// Drop every entry named `name` from `current` and persist the result.
pub fn remove_favorite<S: FavoritesStore>(
    store: &S,
    current: &[MarketConfig],
    name: &str,
) -> Result<Vec<MarketConfig>> {
    let next: Vec<MarketConfig> = current.iter().filter(|m| m.name != name).cloned().collect();
    store.set(&next)?;
    Ok(next)
}

/// Remove `market` if present in `current`, otherwise add it.
pub fn toggle_favorite<S: FavoritesStore>(
    store: &S,
    current: &[MarketConfig],
    market: &MarketConfig,
) -> Result<Vec<MarketConfig>> {
    if contains(current, &market.name) {
        remove_favorite(store, current, &market.name)
    } else {
        add_favorite(store, current, market)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::model::store::MemoryStorage;

    fn btc() -> MarketConfig {
        MarketConfig::new("BTC-PERP", "BTC", 1)
    }

    fn sol() -> MarketConfig {
        MarketConfig::new("SOL/USDC", "SOL", 3)
    }

    #[test]
    fn test_empty_storage_reads_empty() {
        let store = JsonFavoritesStore::new(MemoryStorage::new());
        assert!(store.get().is_empty());
    }

    #[test]
    fn test_set_writes_camel_case_json() {
        let storage = MemoryStorage::new();
        let store = JsonFavoritesStore::new(storage.clone());
        store.set(&[btc()]).unwrap();

        assert_eq!(
            storage.raw(FAVORITE_MARKETS_KEY).as_deref(),
            Some(r#"[{"name":"BTC-PERP","baseSymbol":"BTC","marketIndex":1}]"#)
        );
    }

    #[test]
    fn test_malformed_value_reads_empty() {
        let storage = MemoryStorage::new();
        storage.set_item(FAVORITE_MARKETS_KEY, "{not json").unwrap();
        let store = JsonFavoritesStore::new(storage);
        assert!(store.get().is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let store = JsonFavoritesStore::new(MemoryStorage::new());

        let list = toggle_favorite(&store, &store.get(), &btc()).unwrap();
        let list = toggle_favorite(&store, &list, &sol()).unwrap();
        assert_eq!(list, vec![btc(), sol()]);
        assert_eq!(store.get(), list);

        let list = toggle_favorite(&store, &list, &btc()).unwrap();
        assert_eq!(list, vec![sol()]);
        assert_eq!(store.get(), vec![sol()]);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let store = JsonFavoritesStore::new(MemoryStorage::new());
        let list = add_favorite(&store, &[], &sol()).unwrap();
        let list = add_favorite(&store, &list, &btc()).unwrap();
        assert_eq!(store.get(), vec![sol(), btc()]);
        assert_eq!(list, store.get());
    }

    // Pins current behaviour: add does not deduplicate.
    #[test]
    fn test_add_same_market_twice_duplicates() {
        let store = JsonFavoritesStore::new(MemoryStorage::new());
        let list = add_favorite(&store, &[], &btc()).unwrap();
        let list = add_favorite(&store, &list, &btc()).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(store.get(), vec![btc(), btc()]);

        // A single remove clears every copy.
        let list = remove_favorite(&store, &list, "BTC-PERP").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_stale_snapshot_last_writer_wins() {
        let storage = MemoryStorage::new();
        let tab_a = JsonFavoritesStore::new(storage.clone());
        let tab_b = JsonFavoritesStore::new(storage);

        let snapshot_a = tab_a.get();
        let snapshot_b = tab_b.get();

        add_favorite(&tab_a, &snapshot_a, &btc()).unwrap();
        add_favorite(&tab_b, &snapshot_b, &sol()).unwrap();

        assert_eq!(tab_a.get(), vec![sol()]);
    }

    #[test]
    fn test_add_without_ui_guard_duplicates() {
        let storage = MemoryStorage::new();
        let store = JsonFavoritesStore::new(storage);

        let first = add_favorite(&store, &store.get(), &btc()).unwrap();
        assert_eq!(first.len(), 1);

        // The store does not dedupe; only the button hides "add" once favorited.
        let second = add_favorite(&store, &first, &btc()).unwrap();
        assert_eq!(second, vec![btc(), btc()]);
    }

    #[test]
    fn test_failed_write_surfaces_error() {
        let store = JsonFavoritesStore::new(MemoryStorage::read_only());
        let err = add_favorite(&store, &[], &btc()).unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert!(store.get().is_empty());
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let store = JsonFavoritesStore::with_key(storage.clone(), "devnetFavorites");
        store.set(&[sol()]).unwrap();
        assert_eq!(store.key(), "devnetFavorites");
        assert!(storage.raw(FAVORITE_MARKETS_KEY).is_none());
        assert!(storage.raw("devnetFavorites").is_some());
    }
}
