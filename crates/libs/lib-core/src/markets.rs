//! # Market Configuration
//!
//! Static spot and perp market lists per cluster. This is the only source of
//! market descriptors; the menu copies from it and never mutates it.

use shared::dto::market::MarketConfig;

use crate::config::Cluster;

/// Market shown when the route carries no `name` query parameter.
pub const INITIAL_MARKET: &str = "BTC-PERP";

/// Markets and identity of one trading group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupConfig {
    pub cluster: Cluster,
    pub name: &'static str,
    pub spot_markets: Vec<MarketConfig>,
    pub perp_markets: Vec<MarketConfig>,
}

const MAINNET_SPOT: &[(&str, &str, usize)] = &[
    ("MNGO/USDC", "MNGO", 0),
    ("BTC/USDC", "BTC", 1),
    ("ETH/USDC", "ETH", 2),
    ("SOL/USDC", "SOL", 3),
    ("USDT/USDC", "USDT", 4),
    ("SRM/USDC", "SRM", 5),
    ("RAY/USDC", "RAY", 6),
    ("COPE/USDC", "COPE", 7),
    ("FTT/USDC", "FTT", 8),
    ("MSOL/USDC", "MSOL", 10),
    ("BNB/USDC", "BNB", 11),
    ("AVAX/USDC", "AVAX", 12),
    ("LUNA/USDC", "LUNA", 13),
];

const MAINNET_PERP: &[(&str, &str, usize)] = &[
    ("MNGO-PERP", "MNGO", 0),
    ("BTC-PERP", "BTC", 1),
    ("ETH-PERP", "ETH", 2),
    ("SOL-PERP", "SOL", 3),
    ("SRM-PERP", "SRM", 5),
    ("RAY-PERP", "RAY", 6),
    ("FTT-PERP", "FTT", 8),
    ("ADA-PERP", "ADA", 9),
    ("BNB-PERP", "BNB", 11),
    ("AVAX-PERP", "AVAX", 12),
    ("LUNA-PERP", "LUNA", 13),
];

const DEVNET_SPOT: &[(&str, &str, usize)] = &[
    ("MNGO/USDC", "MNGO", 0),
    ("BTC/USDC", "BTC", 1),
    ("ETH/USDC", "ETH", 2),
    ("SOL/USDC", "SOL", 3),
    ("SRM/USDC", "SRM", 4),
];

const DEVNET_PERP: &[(&str, &str, usize)] = &[
    ("MNGO-PERP", "MNGO", 0),
    ("BTC-PERP", "BTC", 1),
    ("ETH-PERP", "ETH", 2),
    ("SOL-PERP", "SOL", 3),
];

fn to_markets(table: &[(&str, &str, usize)]) -> Vec<MarketConfig> {
    table
        .iter()
        .map(|(name, base, index)| MarketConfig::new(*name, *base, *index))
        .collect()
}

impl GroupConfig {
    pub fn for_cluster(cluster: Cluster) -> Self {
        match cluster {
            Cluster::MainnetBeta => Self {
                cluster,
                name: "mainnet.1",
                spot_markets: to_markets(MAINNET_SPOT),
                perp_markets: to_markets(MAINNET_PERP),
            },
            // No dedicated testnet group; it shares the devnet layout.
            Cluster::Devnet | Cluster::Testnet => Self {
                cluster,
                name: "devnet.2",
                spot_markets: to_markets(DEVNET_SPOT),
                perp_markets: to_markets(DEVNET_PERP),
            },
        }
    }

    /// Look up a configured market by display name.
    pub fn find(&self, name: &str) -> Option<&MarketConfig> {
        self.spot_markets
            .iter()
            .chain(self.perp_markets.iter())
            .find(|m| m.name == name)
    }

    pub fn initial_market(&self) -> Option<&MarketConfig> {
        self.find(INITIAL_MARKET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_per_cluster() {
        for cluster in [Cluster::MainnetBeta, Cluster::Devnet] {
            let group = GroupConfig::for_cluster(cluster);
            let mut names: Vec<&str> = group
                .spot_markets
                .iter()
                .chain(group.perp_markets.iter())
                .map(|m| m.name.as_str())
                .collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate market name on {}", cluster);
        }
    }

    #[test]
    fn test_perp_lists_only_hold_perps() {
        let group = GroupConfig::for_cluster(Cluster::MainnetBeta);
        assert!(group.perp_markets.iter().all(|m| m.is_perp()));
        assert!(group.spot_markets.iter().all(|m| !m.is_perp()));
    }

    #[test]
    fn test_initial_market_is_configured() {
        let group = GroupConfig::for_cluster(Cluster::Devnet);
        assert_eq!(group.initial_market().map(|m| m.market_index), Some(1));
        assert!(group.find("DOGE-PERP").is_none());
    }
}
