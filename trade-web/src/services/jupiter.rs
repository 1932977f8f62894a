//! Jupiter Terminal interop.
//!
//! The swap widget is loaded by a `<script>` tag in `index.html` and exposes
//! `window.Jupiter`. It is mounted in integrated mode into an element the
//! swap page renders.

use lib_core::swap::SwapProviderProps;
use lib_core::{AppError, Result};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function initJupiter(options) {
    if (!window.Jupiter || typeof window.Jupiter.init !== 'function') {
        throw new Error('Jupiter terminal script is not loaded');
    }
    window.Jupiter.init(options);
}

export function closeJupiter() {
    if (window.Jupiter && typeof window.Jupiter.close === 'function') {
        window.Jupiter.close();
    }
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn initJupiter(options: JsValue) -> std::result::Result<(), JsValue>;

    fn closeJupiter();
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitOptions<'a> {
    display_mode: &'static str,
    integrated_target_id: &'a str,
    endpoint: &'a str,
    cluster: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_public_key: Option<String>,
}

/// Mount the widget into the element with id `target_id`.
pub fn init(target_id: &str, props: &SwapProviderProps) -> Result<()> {
    let options = InitOptions {
        display_mode: "integrated",
        integrated_target_id: target_id,
        endpoint: &props.endpoint,
        cluster: props.cluster,
        user_public_key: props.user_public_key.map(|key| key.to_string()),
    };
    let options = serde_wasm_bindgen::to_value(&options)
        .map_err(|e| AppError::InvalidInput(format!("swap widget options: {}", e)))?;

    initJupiter(options)
        .map_err(|e| AppError::InvalidInput(format!("swap widget init failed: {:?}", e)))?;
    log::info!("swap widget mounted on #{} ({})", target_id, props.cluster);
    Ok(())
}

pub fn close() {
    closeJupiter();
}
