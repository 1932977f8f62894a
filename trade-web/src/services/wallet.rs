//! Multi-Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the injected Solana wallet providers (Phantom,
//! Solflare, Backpack). Only connection and the public key are used here;
//! the swap widget handles signing itself.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Supported wallet provider types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    Phantom,
    Solflare,
    Backpack,
}

impl WalletProvider {
    pub const ALL: [WalletProvider; 3] = [
        WalletProvider::Phantom,
        WalletProvider::Solflare,
        WalletProvider::Backpack,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "Phantom",
            WalletProvider::Solflare => "Solflare",
            WalletProvider::Backpack => "Backpack",
        }
    }

    fn id(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "phantom",
            WalletProvider::Solflare => "solflare",
            WalletProvider::Backpack => "backpack",
        }
    }

    pub fn icon_path(&self) -> String {
        format!("/assets/wallets/{}.svg", self.id())
    }
}

// ============================================================================
// WALLET DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function adapterFor(provider) {
    switch (provider) {
        case 'phantom':
            return window.solana && window.solana.isPhantom ? window.solana : null;
        case 'solflare':
            if (window.solflare) {
                return window.solflare;
            }
            return window.solana && window.solana.isSolflare === true ? window.solana : null;
        case 'backpack':
            if (window.backpack) {
                return window.backpack;
            }
            return window.solana && window.solana.isBackpack ? window.solana : null;
        default:
            return null;
    }
}

export function detectWallets() {
    return ['phantom', 'solflare', 'backpack'].filter((p) => adapterFor(p) !== null);
}

export async function connectWallet(provider) {
    const adapter = adapterFor(provider);
    if (!adapter) {
        throw new Error(provider + ' wallet not found');
    }
    try {
        const response = await adapter.connect();
        const publicKey = (response && response.publicKey) || adapter.publicKey;
        if (!publicKey) {
            throw new Error('connected but no public key was returned');
        }
        return publicKey.toString();
    } catch (error) {
        throw new Error('Failed to connect to ' + provider + ': ' + (error.message || String(error)));
    }
}

export async function disconnectWallet(provider) {
    const adapter = adapterFor(provider);
    if (adapter && typeof adapter.disconnect === 'function') {
        await adapter.disconnect();
    }
}

export function getWalletAddress(provider) {
    const adapter = adapterFor(provider);
    if (!adapter || !adapter.publicKey) {
        return null;
    }
    return adapter.publicKey.toString();
}
")]
extern "C" {
    fn detectWallets() -> JsValue;

    #[wasm_bindgen(catch)]
    async fn connectWallet(provider: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn disconnectWallet(provider: &str) -> Result<JsValue, JsValue>;

    fn getWalletAddress(provider: &str) -> Option<String>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Wallet connection state with provider information
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting(WalletProvider),
    Connected { address: String, provider: WalletProvider },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    /// Provider the user picked, while connecting or connected.
    pub fn provider(&self) -> Option<WalletProvider> {
        match self {
            WalletState::Connecting(provider) | WalletState::Connected { provider, .. } => {
                Some(*provider)
            }
            _ => None,
        }
    }
}

/// Installed wallet providers, in display order.
pub fn get_available_wallets() -> Vec<WalletProvider> {
    serde_wasm_bindgen::from_value(detectWallets()).unwrap_or_else(|e| {
        log::warn!("wallet detection returned unexpected value: {:?}", e);
        Vec::new()
    })
}

fn js_error_message(e: JsValue) -> String {
    e.as_string()
        .or_else(|| e.dyn_ref::<js_sys::Error>().map(|err| String::from(err.message())))
        .unwrap_or_else(|| format!("{:?}", e))
}

/// Connect to a wallet provider, returning its base58 address.
pub async fn connect_wallet_provider(provider: WalletProvider) -> Result<String, String> {
    let result = connectWallet(provider.id()).await.map_err(js_error_message)?;
    result
        .as_string()
        .ok_or_else(|| "public key is not a string".to_string())
}

pub async fn disconnect_wallet_provider(provider: WalletProvider) -> Result<(), String> {
    disconnectWallet(provider.id()).await.map_err(js_error_message)?;
    Ok(())
}

/// Address of an already-authorized wallet, without prompting.
pub fn get_connected_wallet_address(provider: WalletProvider) -> Option<String> {
    getWalletAddress(provider.id())
}
