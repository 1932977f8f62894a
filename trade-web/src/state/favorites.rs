//! Favorite markets, persisted in `localStorage`.

use leptos::ev;
use leptos::prelude::*;
use lib_core::model::store::{favorites, FAVORITE_MARKETS_KEY};
use lib_core::{FavoritesStore, JsonFavoritesStore};
use shared::dto::market::MarketConfig;

use crate::services::storage::BrowserStorage;

/// Favorites list shared by the nav menu and the trade page.
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    pub markets: RwSignal<Vec<MarketConfig>>,
    store: JsonFavoritesStore<BrowserStorage>,
}

impl FavoritesContext {
    pub fn new() -> Self {
        let store = JsonFavoritesStore::new(BrowserStorage);
        Self {
            markets: RwSignal::new(store.get()),
            store,
        }
    }

    pub fn count(&self) -> usize {
        self.markets.with(Vec::len)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.markets.with(|list| favorites::contains(list, name))
    }

    /// Add or remove `market`. The list is left as it was if the write fails.
    pub fn toggle(&self, market: &MarketConfig) {
        let current = self.markets.get_untracked();
        match favorites::toggle_favorite(&self.store, &current, market) {
            Ok(next) => self.markets.set(next),
            Err(e) => log::error!("could not save favorite {}: {}", market.name, e),
        }
    }

    /// Re-read the stored list.
    pub fn reload(&self) {
        self.markets.set(self.store.get());
    }
}

pub fn provide_favorites_context() -> FavoritesContext {
    let context = FavoritesContext::new();
    provide_context(context);

    // Another tab wrote the list.
    let handle = window_event_listener(ev::storage, move |event| {
        if event.key().as_deref() == Some(FAVORITE_MARKETS_KEY) {
            log::debug!("favorites changed in another tab");
            context.reload();
        }
    });
    on_cleanup(move || handle.remove());

    context
}

pub fn use_favorites_context() -> FavoritesContext {
    expect_context::<FavoritesContext>()
}
