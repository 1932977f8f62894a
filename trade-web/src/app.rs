//! Trade Web App - Leptos Frontend
//!
//! Provides the shared contexts and routes `/` (trade) and `/swap`.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::pages::{SwapPage, TradePage};
use crate::state::favorites::provide_favorites_context;
use crate::state::i18n::provide_translator;
use crate::state::market::{load_config, provide_market_context};
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    provide_translator(&config.locale);
    provide_wallet_context();
    provide_favorites_context();
    provide_market_context(config);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=TradePage/>
                    <Route path=path!("/swap") view=SwapPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
