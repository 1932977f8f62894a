//! Category tabs of the trade menu.

use leptos::prelude::*;
use lib_core::nav::{CategoryKind, NavMenu};

use crate::state::i18n::use_translator;

#[component]
pub fn MenuCategories(menu: RwSignal<NavMenu>) -> impl IntoView {
    let t = use_translator();

    let categories = move || menu.with(|m| m.categories().to_vec());
    let indicator_style = move || {
        menu.with(|m| {
            format!(
                "width: calc(100% / {}); transform: translateX({}%);",
                m.categories().len(),
                m.active_index() * 100
            )
        })
    };
    let select = move |kind: CategoryKind| {
        menu.update(|m| {
            m.select_category(kind);
        })
    };

    view! {
        <div class="menu-categories" role="tablist">
            <div class="menu-categories-indicator" style=indicator_style></div>
            {move || {
                categories()
                    .into_iter()
                    .map(|category| {
                        let kind = category.kind;
                        let is_active = move || menu.with(|m| m.active_category() == kind);
                        let label = t.t(&kind.label_key()).to_string();
                        let description = t.t(category.description).to_string();
                        let class = move || {
                            if is_active() { "menu-category active" } else { "menu-category" }
                        };
                        view! {
                            <button
                                role="tab"
                                class=class
                                aria-selected=move || is_active().to_string()
                                title=description
                                on:click=move |_| select(kind)
                                on:mouseenter=move |_| select(kind)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
