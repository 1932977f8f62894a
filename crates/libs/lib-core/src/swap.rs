//! # Swap Page Shell
//!
//! Glue between wallet-connection state and the embedded swap widget:
//!
//! - which public key (if any) the widget is given
//! - the props the widget is initialised with, once a connection exists
//! - when to refresh the wallet's token balances
//!
//! The widget itself and the balance fetch are external; see the web crate.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::{Cluster, TradeConfig};
use crate::error::{AppError, Result};

/// 32-byte Solana public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

/// All-zero key (`11111111111111111111111111111111`), used by wallet adapters
/// as a stand-in before a real key is known.
pub const ZERO_KEY: PublicKey = PublicKey([0; 32]);

impl PublicKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == ZERO_KEY
    }
}

impl FromStr for PublicKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s.trim()).into_vec()?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            AppError::InvalidInput(format!("public key must be 32 bytes, got {}", v.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Network connection handed to the swap widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub endpoint: String,
    pub cluster: Cluster,
}

impl Connection {
    pub fn from_config(config: &TradeConfig) -> Self {
        Self {
            endpoint: config.rpc_url.clone(),
            cluster: config.cluster,
        }
    }
}

/// Key to give the swap widget: none while disconnected or while the wallet
/// still reports the zero key.
pub fn resolve_user_public_key(
    connected: bool,
    public_key: Option<&PublicKey>,
) -> Option<PublicKey> {
    if !connected {
        return None;
    }
    public_key.filter(|key| !key.is_zero()).copied()
}

/// Initialisation values of the swap widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapProviderProps {
    pub endpoint: String,
    pub cluster: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_public_key: Option<PublicKey>,
}

impl SwapProviderProps {
    /// `None` until a connection is available; the page renders nothing then.
    pub fn resolve(
        connection: Option<&Connection>,
        connected: bool,
        public_key: Option<&PublicKey>,
    ) -> Option<Self> {
        let connection = connection?;
        Some(Self {
            endpoint: connection.endpoint.clone(),
            cluster: connection.cluster.as_str(),
            user_public_key: resolve_user_public_key(connected, public_key),
        })
    }
}

/// Decides when the wallet token balances are fetched: once each time the
/// connection flag changes to connected with a wallet present, including the
/// first observation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletTokenSync {
    last_connected: Option<bool>,
}

impl WalletTokenSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current connection state; returns `true` when a fetch is due.
    pub fn observe(&mut self, wallet_present: bool, connected: bool) -> bool {
        if self.last_connected == Some(connected) {
            return false;
        }
        self.last_connected = Some(connected);

        let due = wallet_present && connected;
        if due {
            debug!("wallet connected, token fetch due");
        }
        due
    }
}
