//! Swap page: the Jupiter widget plus the connected wallet's balances.

use leptos::prelude::*;
use lib_core::swap::{SwapProviderProps, WalletTokenSync};
use shared::dto::wallet::WalletToken;
use shared::utils::truncate_address;

use crate::components::JupiterForm;
use crate::services::rpc::fetch_wallet_tokens;
use crate::state::i18n::use_translator;
use crate::state::market::use_market_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::format_token_amount;

#[component]
pub fn SwapPage() -> impl IntoView {
    let wallet = use_wallet_context();
    let market_ctx = use_market_context();

    let tokens = RwSignal::new(Vec::<WalletToken>::new());
    let sync = StoredValue::new(WalletTokenSync::new());

    Effect::new(move || {
        let present = wallet.is_present();
        let connected = wallet.is_connected();
        if !connected {
            tokens.set(Vec::new());
        }

        let mut due = false;
        sync.update_value(|s| due = s.observe(present, connected));
        if !due {
            return;
        }

        let connection = market_ctx.connection.get_untracked();
        let (Some(connection), Some(owner)) = (connection, wallet.public_key()) else {
            log::warn!("token fetch due but no connection or key");
            return;
        };
        leptos::task::spawn_local(async move {
            match fetch_wallet_tokens(&connection, &owner).await {
                Ok(list) => {
                    log::info!("fetched {} token accounts", list.len());
                    tokens.set(list);
                }
                Err(e) => log::warn!("wallet token fetch failed: {}", e),
            }
        });
    });

    let props = Memo::new(move |_| {
        market_ctx.connection.with(|connection| {
            SwapProviderProps::resolve(
                connection.as_ref(),
                wallet.is_connected(),
                wallet.public_key().as_ref(),
            )
        })
    });

    view! {
        {move || {
            props.get().map(|props| view! {
                <main class="swap-page">
                    <JupiterForm props=props/>
                    <WalletBalances tokens=tokens/>
                </main>
            })
        }}
    }
}

#[component]
fn WalletBalances(tokens: RwSignal<Vec<WalletToken>>) -> impl IntoView {
    let t = use_translator();
    let wallet = use_wallet_context();

    let balances = move || {
        let list: Vec<WalletToken> =
            tokens.get().into_iter().filter(|token| !token.is_empty()).collect();
        if list.is_empty() {
            return view! { <p class="muted">{t.t("no-balances")}</p> }.into_any();
        }
        view! {
            <ul class="balance-list">
                {list
                    .into_iter()
                    .map(|token| view! {
                        <li>
                            <span class="mint" title=token.mint.clone()>
                                {truncate_address(&token.mint)}
                            </span>
                            <span class="amount">{format_token_amount(&token)}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <Show when=move || wallet.is_connected()>
            <section class="wallet-balances">
                <h2>{t.t("wallet-balances")}</h2>
                {balances}
            </section>
        </Show>
    }
}
