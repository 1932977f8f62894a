//! # Market Icons
//!
//! Explicit table from base symbol to monochrome icon. Symbols without an
//! icon get [`MarketIcon::Placeholder`]; lookup never fails.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketIcon {
    Ada,
    Avax,
    Bnb,
    Btc,
    Cope,
    Eth,
    Ftt,
    Luna,
    Mngo,
    Msol,
    Ray,
    Sol,
    Srm,
    Usdc,
    Usdt,
    Placeholder,
}

const ICON_TABLE: &[(&str, MarketIcon)] = &[
    ("ADA", MarketIcon::Ada),
    ("AVAX", MarketIcon::Avax),
    ("BNB", MarketIcon::Bnb),
    ("BTC", MarketIcon::Btc),
    ("COPE", MarketIcon::Cope),
    ("ETH", MarketIcon::Eth),
    ("FTT", MarketIcon::Ftt),
    ("LUNA", MarketIcon::Luna),
    ("MNGO", MarketIcon::Mngo),
    ("MSOL", MarketIcon::Msol),
    ("RAY", MarketIcon::Ray),
    ("SOL", MarketIcon::Sol),
    ("SRM", MarketIcon::Srm),
    ("USDC", MarketIcon::Usdc),
    ("USDT", MarketIcon::Usdt),
];

impl MarketIcon {
    /// Icon for a base symbol, case-insensitive.
    pub fn for_symbol(symbol: &str) -> Self {
        ICON_TABLE
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(symbol.trim()))
            .map(|(_, icon)| *icon)
            .unwrap_or(MarketIcon::Placeholder)
    }

    pub fn id(&self) -> &'static str {
        match self {
            MarketIcon::Ada => "ada",
            MarketIcon::Avax => "avax",
            MarketIcon::Bnb => "bnb",
            MarketIcon::Btc => "btc",
            MarketIcon::Cope => "cope",
            MarketIcon::Eth => "eth",
            MarketIcon::Ftt => "ftt",
            MarketIcon::Luna => "luna",
            MarketIcon::Mngo => "mngo",
            MarketIcon::Msol => "msol",
            MarketIcon::Ray => "ray",
            MarketIcon::Sol => "sol",
            MarketIcon::Srm => "srm",
            MarketIcon::Usdc => "usdc",
            MarketIcon::Usdt => "usdt",
            MarketIcon::Placeholder => "question-mark-circle",
        }
    }

    /// Path of the SVG served alongside the app.
    pub fn asset_path(&self) -> String {
        format!("/assets/icons/{}.svg", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Cluster;
    use crate::markets::GroupConfig;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(MarketIcon::for_symbol("BTC"), MarketIcon::Btc);
        assert_eq!(MarketIcon::for_symbol("msol"), MarketIcon::Msol);
        assert_eq!(MarketIcon::for_symbol(" Sol "), MarketIcon::Sol);
    }

    #[test]
    fn test_unknown_symbol_falls_back() {
        assert_eq!(MarketIcon::for_symbol("DOGE"), MarketIcon::Placeholder);
        assert_eq!(MarketIcon::for_symbol(""), MarketIcon::Placeholder);
        assert_eq!(
            MarketIcon::for_symbol("DOGE").asset_path(),
            "/assets/icons/question-mark-circle.svg"
        );
    }

    #[test]
    fn test_every_configured_market_has_an_icon() {
        for cluster in [Cluster::MainnetBeta, Cluster::Devnet] {
            let group = GroupConfig::for_cluster(cluster);
            for market in group.spot_markets.iter().chain(group.perp_markets.iter()) {
                assert_ne!(
                    MarketIcon::for_symbol(&market.base_symbol),
                    MarketIcon::Placeholder,
                    "{} has no icon",
                    market.base_symbol
                );
            }
        }
    }
}
