//! Startup configuration, the trading group and its risk weights.

use leptos::prelude::*;
use lib_core::config::{ENV_CLUSTER, ENV_GROUP_URL, ENV_HOVER_DELAY_MS, ENV_LOCALE, ENV_RPC_URL};
use lib_core::leverage::{market_leverage, GroupSnapshot};
use lib_core::markets::GroupConfig;
use lib_core::route::selected_market;
use lib_core::swap::Connection;
use lib_core::TradeConfig;
use shared::dto::market::MarketConfig;

use crate::services::rpc::fetch_group_snapshot;

/// Configuration baked in at build time (`TRADE_*` variables seen by `trunk build`).
pub fn load_config() -> TradeConfig {
    let lookup = |key: &str| {
        let value = match key {
            ENV_CLUSTER => option_env!("TRADE_CLUSTER"),
            ENV_RPC_URL => option_env!("TRADE_RPC_URL"),
            ENV_GROUP_URL => option_env!("TRADE_GROUP_URL"),
            ENV_HOVER_DELAY_MS => option_env!("TRADE_HOVER_DELAY_MS"),
            ENV_LOCALE => option_env!("TRADE_LOCALE"),
            _ => None,
        };
        value.map(str::to_string)
    };

    TradeConfig::from_lookup(lookup).unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {}", e);
        TradeConfig::default()
    })
}

#[derive(Clone, Copy)]
pub struct MarketContext {
    pub config: StoredValue<TradeConfig>,
    pub group: StoredValue<GroupConfig>,
    /// Risk weights; `None` until loaded, or for good when no endpoint is configured.
    pub snapshot: RwSignal<Option<GroupSnapshot>>,
    pub connection: RwSignal<Option<Connection>>,
}

impl MarketContext {
    pub fn hover_delay_ms(&self) -> u32 {
        self.config.with_value(|config| config.hover_delay_ms)
    }

    /// Max leverage of `market`, `1` without risk weights.
    pub fn leverage(&self, market: &MarketConfig) -> f64 {
        self.snapshot.with(|snapshot| market_leverage(snapshot.as_ref(), market))
    }

    /// Market named by the query string, else the group's initial market.
    pub fn selected_market(&self, search: &str) -> Option<MarketConfig> {
        self.group.with_value(|group| match selected_market(search) {
            Some(name) => group.find(&name).cloned(),
            None => group.initial_market().cloned(),
        })
    }
}

pub fn provide_market_context(config: TradeConfig) -> MarketContext {
    let group = GroupConfig::for_cluster(config.cluster);
    log::info!(
        "{} on {}: {} spot, {} perp markets",
        group.name,
        config.cluster,
        group.spot_markets.len(),
        group.perp_markets.len()
    );

    let connection = Connection::from_config(&config);
    let group_url = config.group_url.clone();

    let context = MarketContext {
        config: StoredValue::new(config),
        group: StoredValue::new(group),
        snapshot: RwSignal::new(None),
        connection: RwSignal::new(Some(connection)),
    };

    if let Some(url) = group_url {
        let snapshot = context.snapshot;
        leptos::task::spawn_local(async move {
            match fetch_group_snapshot(&url).await {
                Ok(loaded) => snapshot.set(Some(loaded)),
                Err(e) => log::warn!("risk weights unavailable, showing 1x: {}", e),
            }
        });
    }

    provide_context(context);
    context
}

pub fn use_market_context() -> MarketContext {
    expect_context::<MarketContext>()
}
