//! # Trade Web
//!
//! Browser client for Mango markets: the "Trade" market navigation menu and
//! the Jupiter swap page. State machines and payload handling live in
//! `lib-core`; this crate wires them to Leptos and the DOM.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("trade web client starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen from `index.html`.
fn hide_loading_screen() {
    let Some(loading) = gloo_utils::document().get_element_by_id("leptos-loading") else {
        log::debug!("no loading screen element");
        return;
    };
    if let Err(e) = loading.class_list().add_1("hidden") {
        log::warn!("could not hide loading screen: {:?}", e);
    }
}
