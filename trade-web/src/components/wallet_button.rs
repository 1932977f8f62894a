//! Connect / disconnect button with a wallet picker.

use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::services::wallet::{get_available_wallets, WalletProvider, WalletState};
use crate::state::i18n::use_translator;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletButton() -> impl IntoView {
    let t = use_translator();
    let wallet = use_wallet_context();

    let show_picker = RwSignal::new(false);
    let installed = RwSignal::new(Vec::<WalletProvider>::new());

    let open_picker = move |_| {
        installed.set(get_available_wallets());
        show_picker.update(|shown| *shown = !*shown);
    };

    view! {
        <div class="wallet-button-container">
            {move || match wallet.wallet.get() {
                WalletState::Connected { address, provider } => view! {
                    <button
                        class="wallet-button connected"
                        title=format!("{} · {}", provider.name(), t.t("disconnect"))
                        on:click=move |_| wallet.disconnect_wallet()
                    >
                        {truncate_address(&address)}
                    </button>
                }
                .into_any(),
                WalletState::Connecting(provider) => view! {
                    <button class="wallet-button" disabled=true>
                        {t.t("connecting")} " " {provider.name()}
                    </button>
                }
                .into_any(),
                WalletState::Disconnected | WalletState::Error(_) => view! {
                    <button class="wallet-button" on:click=open_picker>
                        {t.t("connect")}
                    </button>
                }
                .into_any(),
            }}

            <Show when=move || show_picker.get() && !wallet.is_connected()>
                <div class="wallet-picker">
                    {move || {
                        let detected = installed.get();
                        WalletProvider::ALL
                            .into_iter()
                            .map(|provider| {
                                let available = detected.contains(&provider);
                                view! {
                                    <button
                                        class="wallet-option"
                                        disabled={!available}
                                        on:click=move |_| {
                                            show_picker.set(false);
                                            wallet.connect(provider);
                                        }
                                    >
                                        <img
                                            src=provider.icon_path()
                                            alt=""
                                            class="wallet-icon"
                                        />
                                        <span class="wallet-name">{provider.name()}</span>
                                        {(!available)
                                            .then(|| {
                                                let label = t.t("not-installed");
                                                view! { <span class="muted">{label}</span> }
                                            })}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            {move || match wallet.wallet.get() {
                WalletState::Error(message) => Some(view! { <div class="error">{message}</div> }),
                _ => None,
            }}
        </div>
    }
}
