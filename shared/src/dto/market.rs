//! # Market Data Transfer Objects
//!
//! Defines the market descriptor shared by the navigation menu, the
//! favorites store and the leverage computation.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "name": "BTC-PERP",
//!   "baseSymbol": "BTC",
//!   "marketIndex": 1
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Metadata for one tradable instrument (spot pair or perpetual contract).
///
/// Supplied by the group configuration and treated as read-only everywhere
/// else. `name` is the unique display identifier, `base_symbol` drives the
/// icon lookup and `market_index` selects the risk weights inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketConfig {
    /// Display name, e.g. `"SOL/USDC"` or `"SOL-PERP"`.
    pub name: String,

    /// Base asset symbol, e.g. `"SOL"`.
    pub base_symbol: String,

    /// Slot of this market inside its group.
    pub market_index: usize,
}

/// Whether a market is a spot pair or a perpetual contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    Spot,
    Perp,
}

impl MarketConfig {
    pub fn new(
        name: impl Into<String>,
        base_symbol: impl Into<String>,
        market_index: usize,
    ) -> Self {
        Self {
            name: name.into(),
            base_symbol: base_symbol.into(),
            market_index,
        }
    }

    /// Perpetual markets are recognised by name (`BTC-PERP`), the same way the
    /// group configuration names them.
    pub fn is_perp(&self) -> bool {
        self.name.contains("PERP")
    }

    pub fn kind(&self) -> MarketKind {
        if self.is_perp() {
            MarketKind::Perp
        } else {
            MarketKind::Spot
        }
    }
}
