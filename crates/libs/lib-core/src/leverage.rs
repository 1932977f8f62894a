//! # Market Leverage
//!
//! Maximum leverage shown next to every market in the menu, derived from the
//! group's initial asset weight for that market:
//!
//! ```text
//! leverage = round(-100 / (w - 1)) / 100
//! ```
//!
//! Weights come from a [`RiskWeightSource`], normally a [`GroupSnapshot`]
//! read from the group endpoint. Without a source the leverage is `1`.
//! The value is display-only and recomputed whenever the source changes.
//!
//! ```rust
//! use lib_core::leverage::leverage_from_weight;
//!
//! assert_eq!(leverage_from_weight(0.9), 10.0);
//! assert_eq!(leverage_from_weight(0.8), 5.0);
//! ```

use serde::{Deserialize, Serialize};
use shared::dto::market::{MarketConfig, MarketKind};
use tracing::debug;

use crate::error::Result;

/// Which health tier the weights are read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightTier {
    Init,
    Maint,
}

/// Raw per-market risk parameters of a group slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketWeights {
    pub init_asset_weight: f64,
    pub init_liab_weight: f64,
    pub maint_asset_weight: f64,
    pub maint_liab_weight: f64,
}

/// Asset/liability weight pair for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierWeights {
    pub asset: f64,
    pub liab: f64,
}

/// Weights of one market index for both spot and perp, for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub spot: Option<TierWeights>,
    pub perp: Option<TierWeights>,
}

impl MarketWeights {
    pub fn tier(&self, tier: WeightTier) -> TierWeights {
        match tier {
            WeightTier::Init => TierWeights {
                asset: self.init_asset_weight,
                liab: self.init_liab_weight,
            },
            WeightTier::Maint => TierWeights {
                asset: self.maint_asset_weight,
                liab: self.maint_liab_weight,
            },
        }
    }
}

/// Anything able to hand out per-market risk weights.
pub trait RiskWeightSource {
    fn market_weights(&self, kind: MarketKind, market_index: usize) -> Option<&MarketWeights>;
}

/// Risk-weight snapshot of a trading group, indexed by market slot.
///
/// Empty slots are `null` in the JSON payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSnapshot {
    #[serde(default)]
    pub spot_markets: Vec<Option<MarketWeights>>,
    #[serde(default)]
    pub perp_markets: Vec<Option<MarketWeights>>,
}

impl GroupSnapshot {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

impl RiskWeightSource for GroupSnapshot {
    fn market_weights(&self, kind: MarketKind, market_index: usize) -> Option<&MarketWeights> {
        let slots = match kind {
            MarketKind::Spot => &self.spot_markets,
            MarketKind::Perp => &self.perp_markets,
        };
        slots.get(market_index).and_then(Option::as_ref)
    }
}

/// Spot and perp weights of `market_index` for `tier`.
pub fn get_weights<R: RiskWeightSource + ?Sized>(
    group: &R,
    market_index: usize,
    tier: WeightTier,
) -> Weights {
    Weights {
        spot: group.market_weights(MarketKind::Spot, market_index).map(|w| w.tier(tier)),
        perp: group.market_weights(MarketKind::Perp, market_index).map(|w| w.tier(tier)),
    }
}

/// Leverage implied by an initial asset weight, rounded to two decimals.
///
/// Weights of `1` or more (no borrowing power) and non-finite weights give `1`.
pub fn leverage_from_weight(weight: f64) -> f64 {
    if !weight.is_finite() || weight >= 1.0 {
        return 1.0;
    }
    (-100.0 / (weight - 1.0)).round() / 100.0
}

/// Leverage of `market` under `group`, or `1` without a group.
pub fn market_leverage<R: RiskWeightSource + ?Sized>(
    group: Option<&R>,
    market: &MarketConfig,
) -> f64 {
    let Some(group) = group else {
        return 1.0;
    };

    let weights = get_weights(group, market.market_index, WeightTier::Init);
    let tier = match market.kind() {
        MarketKind::Perp => weights.perp,
        MarketKind::Spot => weights.spot,
    };

    match tier {
        Some(tier) => leverage_from_weight(tier.asset),
        None => {
            debug!(
                market = %market.name,
                index = market.market_index,
                "no risk weights for market"
            );
            1.0
        }
    }
}
