//! Trade page: header of the market selected through the nav menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use lib_core::icons::MarketIcon;
use lib_core::route::selected_market;
use shared::dto::market::MarketKind;
use shared::utils::format_leverage;

use crate::components::FavoriteMarketButton;
use crate::state::i18n::use_translator;
use crate::state::market::use_market_context;

#[component]
pub fn TradePage() -> impl IntoView {
    let t = use_translator();
    let market_ctx = use_market_context();
    let location = use_location();

    let market =
        Memo::new(move |_| location.search.with(|search| market_ctx.selected_market(search)));

    view! {
        <main class="trade-page">
            {move || match market.get() {
                Some(market) => {
                    let icon = MarketIcon::for_symbol(&market.base_symbol);
                    let kind = match market.kind() {
                        MarketKind::Spot => t.t("spot"),
                        MarketKind::Perp => t.t("perp"),
                    };
                    let leverage_market = market.clone();
                    let leverage = move || format_leverage(market_ctx.leverage(&leverage_market));
                    view! {
                        <section class="market-header">
                            <img class="market-icon-large" src=icon.asset_path() alt=""/>
                            <h1>{market.name.clone()}</h1>
                            <span class="market-kind">{kind}</span>
                            <span class="market-leverage">
                                {t.t("max-leverage")} ": " {leverage}
                            </span>
                            <FavoriteMarketButton market=market/>
                        </section>
                    }
                    .into_any()
                }
                None => {
                    let requested = location
                        .search
                        .with(|search| selected_market(search))
                        .unwrap_or_default();
                    view! {
                        <section class="market-header">
                            <h1>{requested}</h1>
                            <p class="muted">{t.t("unknown-market")}</p>
                        </section>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}
