//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use super::trade_nav_menu::TradeNavMenu;
use super::wallet_button::WalletButton;
use crate::state::i18n::use_translator;
use crate::utils::constants::SWAP_PATH;

#[component]
pub fn Navbar() -> impl IntoView {
    let t = use_translator();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="brand-accent">"Mango"</span><span class="brand-white">"Markets"</span>
                    </span>
                </A>
                <TradeNavMenu/>
                <A href=SWAP_PATH attr:class="nav-link">
                    {t.t("swap")}
                </A>
                <div class="nav-spacer"></div>
                <WalletButton/>
            </div>
        </nav>
    }
}
