//! Wallet state management

use std::str::FromStr;

use leptos::prelude::*;
use lib_core::swap::PublicKey;

use crate::services::wallet::{
    connect_wallet_provider, disconnect_wallet_provider, get_connected_wallet_address,
    WalletProvider, WalletState,
};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    /// A wallet has been picked, whether or not it finished connecting.
    pub fn is_present(&self) -> bool {
        self.wallet.with(|state| state.provider().is_some())
    }

    /// Connected address as a key; `None` if it does not decode.
    pub fn public_key(&self) -> Option<PublicKey> {
        self.wallet.with(|state| {
            let address = state.address()?;
            PublicKey::from_str(address)
                .map_err(|e| log::warn!("wallet reported undecodable address {}: {}", address, e))
                .ok()
        })
    }

    pub fn set_connecting(&self, provider: WalletProvider) {
        self.wallet.set(WalletState::Connecting(provider));
    }

    pub fn set_connected(&self, address: String, provider: WalletProvider) {
        self.wallet.set(WalletState::Connected { address, provider });
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }

    /// Prompt `provider` for a connection.
    pub fn connect(&self, provider: WalletProvider) {
        let context = *self;
        context.set_connecting(provider);
        leptos::task::spawn_local(async move {
            match connect_wallet_provider(provider).await {
                Ok(address) => {
                    log::info!(
                        "{} connected: {}",
                        provider.name(),
                        shared::utils::truncate_address(&address)
                    );
                    context.set_connected(address, provider);
                }
                Err(e) => {
                    log::warn!("{} connection failed: {}", provider.name(), e);
                    context.set_error(e);
                }
            }
        });
    }

    pub fn disconnect_wallet(&self) {
        let context = *self;
        if let Some(provider) = context.wallet.with_untracked(|state| state.provider()) {
            leptos::task::spawn_local(async move {
                if let Err(e) = disconnect_wallet_provider(provider).await {
                    log::warn!("{} disconnect failed: {}", provider.name(), e);
                }
            });
        }
        context.disconnect();
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();

    // Wallets that already trusted this site report their key without a prompt.
    let restored = WalletProvider::ALL
        .into_iter()
        .find_map(|provider| {
            get_connected_wallet_address(provider).map(|address| (address, provider))
        });
    if let Some((address, provider)) = restored {
        log::info!("restored {} session", provider.name());
        context.set_connected(address, provider);
    }

    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
