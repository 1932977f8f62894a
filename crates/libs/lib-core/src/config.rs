//! # Application Configuration
//!
//! [`TradeConfig`] holds everything the web client needs at startup: which
//! cluster to talk to, the RPC endpoint handed to the swap widget, where to
//! read the risk-weight snapshot, the hover delay of the market menu and the
//! UI locale.
//!
//! Values come from any key lookup via [`TradeConfig::from_lookup`]. Native
//! tools use [`TradeConfig::from_env`] (which also loads a `.env` file); the
//! WASM build passes the values baked in at compile time.
//!
//! | key | default |
//! |---|---|
//! | `TRADE_CLUSTER` | `mainnet-beta` |
//! | `TRADE_RPC_URL` | `https://api.mainnet-beta.solana.com` |
//! | `TRADE_GROUP_URL` | unset (leverage shows `1x`) |
//! | `TRADE_HOVER_DELAY_MS` | `200` |
//! | `TRADE_LOCALE` | `en` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, Result};

pub const ENV_CLUSTER: &str = "TRADE_CLUSTER";
pub const ENV_RPC_URL: &str = "TRADE_RPC_URL";
pub const ENV_GROUP_URL: &str = "TRADE_GROUP_URL";
pub const ENV_HOVER_DELAY_MS: &str = "TRADE_HOVER_DELAY_MS";
pub const ENV_LOCALE: &str = "TRADE_LOCALE";

/// Delay between a pointer entering/leaving the menu and the menu reacting.
pub const DEFAULT_HOVER_DELAY_MS: u32 = 200;
const MAX_HOVER_DELAY_MS: u32 = 2_000;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Solana cluster identifier, as passed to the swap widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    #[default]
    MainnetBeta,
    Devnet,
    Testnet,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            other => Err(AppError::Config(format!("unknown cluster: {}", other))),
        }
    }
}

/// Startup configuration of the web client.
#[derive(Clone, Debug, PartialEq)]
pub struct TradeConfig {
    pub cluster: Cluster,

    /// JSON-RPC endpoint used for the swap widget and the wallet token fetch.
    pub rpc_url: String,

    /// Endpoint serving the group risk-weight snapshot.
    ///
    /// When unset the menu has no group context and every market shows `1x`.
    pub group_url: Option<String>,

    pub hover_delay_ms: u32,

    /// Preferred UI locale; the browser language wins when supported.
    pub locale: String,
}

impl Default for TradeConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::MainnetBeta,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            group_url: None,
            hover_delay_ms: DEFAULT_HOVER_DELAY_MS,
            locale: "en".to_string(),
        }
    }
}

impl TradeConfig {
    /// Build a config from an arbitrary key source, keeping defaults for
    /// missing or empty keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(cluster) = get(ENV_CLUSTER) {
            config.cluster = cluster.parse()?;
        }
        if let Some(rpc_url) = get(ENV_RPC_URL) {
            config.rpc_url = rpc_url;
        }
        config.group_url = get(ENV_GROUP_URL);
        if let Some(delay) = get(ENV_HOVER_DELAY_MS) {
            config.hover_delay_ms = delay
                .trim()
                .parse()
                .map_err(|e| {
                    AppError::Config(format!("{} must be a number: {}", ENV_HOVER_DELAY_MS, e))
                })?;
        }
        if let Some(locale) = get(ENV_LOCALE) {
            config.locale = locale;
        }

        config.validate()?;
        debug!(cluster = %config.cluster, rpc_url = %config.rpc_url, "trade config loaded");
        Ok(config)
    }

    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; real env vars still apply.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.rpc_url.starts_with("https://") || self.rpc_url.starts_with("http://")) {
            return Err(AppError::Config(format!(
                "{} must be an http(s) URL, got {}",
                ENV_RPC_URL, self.rpc_url
            )));
        }

        if let Some(group_url) = &self.group_url {
            let allowed = group_url.starts_with("https://")
                || group_url.starts_with("http://")
                || group_url.starts_with('/');
            if !allowed {
                return Err(AppError::Config(format!(
                    "{} must be an http(s) URL or an absolute path, got {}",
                    ENV_GROUP_URL, group_url
                )));
            }
        }

        if self.hover_delay_ms > MAX_HOVER_DELAY_MS {
            return Err(AppError::Config(format!(
                "{} must be at most {}",
                ENV_HOVER_DELAY_MS, MAX_HOVER_DELAY_MS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = TradeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TradeConfig::default());
        assert_eq!(config.hover_delay_ms, 200);
        assert_eq!(config.cluster.as_str(), "mainnet-beta");
    }

    #[test]
    fn test_overrides() {
        let config = TradeConfig::from_lookup(lookup(&[
            (ENV_CLUSTER, "devnet"),
            (ENV_RPC_URL, "https://api.devnet.solana.com"),
            (ENV_GROUP_URL, "/group.json"),
            (ENV_HOVER_DELAY_MS, "150"),
            (ENV_LOCALE, "es"),
        ]))
        .unwrap();

        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.group_url.as_deref(), Some("/group.json"));
        assert_eq!(config.hover_delay_ms, 150);
        assert_eq!(config.locale, "es");
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let config =
            TradeConfig::from_lookup(lookup(&[(ENV_RPC_URL, "  "), (ENV_GROUP_URL, "")])).unwrap();
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert!(config.group_url.is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(TradeConfig::from_lookup(lookup(&[(ENV_CLUSTER, "localnet")])).is_err());
        assert!(TradeConfig::from_lookup(lookup(&[(ENV_RPC_URL, "ws://node")])).is_err());
        assert!(TradeConfig::from_lookup(lookup(&[(ENV_HOVER_DELAY_MS, "fast")])).is_err());
        assert!(TradeConfig::from_lookup(lookup(&[(ENV_HOVER_DELAY_MS, "5000")])).is_err());
    }

    #[test]
    fn test_cluster_round_trip_through_str() {
        for cluster in [Cluster::MainnetBeta, Cluster::Devnet, Cluster::Testnet] {
            assert_eq!(cluster.as_str().parse::<Cluster>().unwrap(), cluster);
        }
    }
}
