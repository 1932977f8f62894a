//! Star toggle for a market's favorite status.

use leptos::ev;
use leptos::prelude::*;
use shared::dto::market::MarketConfig;

use crate::state::favorites::use_favorites_context;
use crate::state::i18n::use_translator;

#[component]
pub fn FavoriteMarketButton(market: MarketConfig) -> impl IntoView {
    let t = use_translator();
    let favorites = use_favorites_context();

    let name = market.name.clone();
    let is_favorite = Memo::new(move |_| favorites.contains(&name));

    let on_click = move |event: ev::MouseEvent| {
        event.prevent_default();
        event.stop_propagation();
        favorites.toggle(&market);
    };

    view! {
        <button
            class=move || {
                if is_favorite.get() { "favorite-button active" } else { "favorite-button" }
            }
            aria-pressed=move || is_favorite.get().to_string()
            title=move || {
                if is_favorite.get() { t.t("remove-favorite") } else { t.t("add-favorite") }
            }
            on:click=on_click
        >
            {move || if is_favorite.get() { "★" } else { "☆" }}
        </button>
    }
}
