//! "Trade" dropdown in the navbar.
//!
//! Opens on click, or [`lib_core::config::DEFAULT_HOVER_DELAY_MS`] after the
//! pointer enters it, and lists the markets of the active category tab. All
//! transitions go through [`NavMenu`]; this component only owns the browser
//! timer and the document-level pointer-down listener.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use lib_core::icons::MarketIcon;
use lib_core::nav::{NavMenu, TimerCommand};
use lib_core::route::{is_active_market, market_href};
use shared::dto::market::MarketConfig;
use shared::utils::format_leverage;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use super::favorite_button::FavoriteMarketButton;
use super::menu_categories::MenuCategories;
use crate::state::favorites::use_favorites_context;
use crate::state::i18n::use_translator;
use crate::state::market::use_market_context;
use crate::utils::constants::MARKET_ICON_SIZE_PX;

const POINTER_DOWN_EVENT: &str = "mousedown";

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[component]
pub fn TradeNavMenu() -> impl IntoView {
    let t = use_translator();
    let market_ctx = use_market_context();
    let favorites = use_favorites_context();

    let mut initial = NavMenu::new(market_ctx.hover_delay_ms());
    initial.sync_favorites(favorites.markets.with_untracked(Vec::len));
    let menu = RwSignal::new(initial);

    // Dropping a Timeout clears it, so replacing this value cancels the old timer.
    let timer = StoredValue::new_local(None::<Timeout>);
    let trigger_ref = NodeRef::<html::Button>::new();

    Effect::new(move || {
        let count = favorites.count();
        menu.update(|m| m.sync_favorites(count));
    });

    let apply = move |command: TimerCommand| match command {
        TimerCommand::Keep => {}
        TimerCommand::Cancel => timer.set_value(None),
        TimerCommand::Schedule { delay_ms, deadline } => {
            let timeout = Timeout::new(delay_ms, move || {
                let count = favorites.markets.with_untracked(Vec::len);
                menu.try_update(|m| m.fire(deadline, count));
            });
            timer.set_value(Some(timeout));
        }
    };

    let on_enter = move |_| {
        apply(menu.try_update(|m| m.pointer_enter(now_ms())).unwrap_or(TimerCommand::Keep))
    };
    let on_leave = move |_| {
        apply(menu.try_update(|m| m.pointer_leave(now_ms())).unwrap_or(TimerCommand::Keep))
    };
    let on_click = move |_| apply(menu.try_update(|m| m.click()).unwrap_or(TimerCommand::Keep));

    let pointer_down = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
        let inside_trigger = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .zip(trigger_ref.get_untracked())
            .map(|(node, trigger)| trigger.contains(Some(&node)))
            .unwrap_or(false);
        if NavMenu::suppresses_pointer_down(inside_trigger) {
            event.stop_propagation();
        }
    });
    let installed = gloo_utils::document().add_event_listener_with_callback(
        POINTER_DOWN_EVENT,
        pointer_down.as_ref().unchecked_ref(),
    );
    if let Err(e) = installed {
        log::warn!("failed to install pointer-down listener: {:?}", e);
    }
    let pointer_down = StoredValue::new_local(Some(pointer_down));

    on_cleanup(move || {
        let mut listener = None;
        pointer_down.update_value(|slot| listener = slot.take());
        if let Some(listener) = listener {
            let _ = gloo_utils::document().remove_event_listener_with_callback(
                POINTER_DOWN_EVENT,
                listener.as_ref().unchecked_ref(),
            );
        }
        menu.try_update_untracked(|m| m.teardown());
        timer.set_value(None);
    });

    let open = move || menu.with(|m| m.is_open());

    view! {
        <div class="trade-nav" on:mouseenter=on_enter on:mouseleave=on_leave>
            <button
                node_ref=trigger_ref
                class=move || if open() { "trade-nav-trigger open" } else { "trade-nav-trigger" }
                aria-expanded=move || open().to_string()
                on:click=on_click
            >
                {t.t("trade")}
                <span class="chevron" aria-hidden="true">"▾"</span>
            </button>
            <Show when=open>
                <div class="trade-nav-panel">
                    <MenuCategories menu=menu/>
                    <MarketList menu=menu/>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MarketList(menu: RwSignal<NavMenu>) -> impl IntoView {
    let market_ctx = use_market_context();
    let favorites = use_favorites_context();

    let markets = move || {
        favorites.markets.with(|list| {
            menu.with(|m| market_ctx.group.with_value(|group| m.markets(list, group)))
        })
    };

    view! {
        <ul class="market-list">
            {move || {
                markets()
                    .into_iter()
                    .map(|market| view! { <MarketRow market=market/> })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn MarketRow(market: MarketConfig) -> impl IntoView {
    let t = use_translator();
    let market_ctx = use_market_context();
    let location = use_location();

    let href = market_href(&market.name);
    let icon = MarketIcon::for_symbol(&market.base_symbol);
    let name = market.name.clone();

    let active = {
        let name = market.name.clone();
        move || {
            location
                .pathname
                .with(|path| location.search.with(|search| is_active_market(path, search, &name)))
        }
    };

    let leverage = {
        let market = market.clone();
        move || format_leverage(market_ctx.leverage(&market))
    };

    view! {
        <li class=move || if active() { "market-row active" } else { "market-row" }>
            <A href=href>
                <img
                    class="market-icon"
                    src=icon.asset_path()
                    alt=""
                    width=MARKET_ICON_SIZE_PX.to_string()
                    height=MARKET_ICON_SIZE_PX.to_string()
                />
                <span class="market-name">{name}</span>
                <span class="market-leverage" title=t.t("max-leverage")>{leverage}</span>
            </A>
            <FavoriteMarketButton market=market/>
        </li>
    }
}
