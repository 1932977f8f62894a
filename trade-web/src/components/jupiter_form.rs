//! Mount point of the Jupiter swap widget.

use leptos::prelude::*;
use lib_core::swap::SwapProviderProps;
use uuid::Uuid;

use crate::services::jupiter;
use crate::utils::constants::JUPITER_TARGET_PREFIX;

/// Renders the widget container and initialises the widget into it once
/// mounted. A new set of props means a new component, and so a fresh widget.
#[component]
pub fn JupiterForm(props: SwapProviderProps) -> impl IntoView {
    let target_id = format!("{}-{}", JUPITER_TARGET_PREFIX, Uuid::new_v4().simple());

    let mount_id = target_id.clone();
    Effect::new(move || {
        if let Err(e) = jupiter::init(&mount_id, &props) {
            log::error!("{}", e);
        }
    });
    on_cleanup(jupiter::close);

    view! { <div id=target_id class="jupiter-terminal"></div> }
}
