//! # Wallet Token DTOs
//!
//! Token balances owned by the connected wallet, as shown under the swap
//! widget after a connection.

use serde::{Deserialize, Serialize};

/// One SPL token account owned by the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletToken {
    /// Token account address (base58).
    pub account: String,

    /// Mint address (base58).
    pub mint: String,

    /// Raw integer amount as reported by the RPC node.
    pub amount: u64,

    /// Mint decimals.
    pub decimals: u8,
}

impl WalletToken {
    /// Amount scaled by the mint decimals.
    pub fn ui_amount(&self) -> f64 {
        self.amount as f64 / 10f64.powi(self.decimals as i32)
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_amount() {
        let token = WalletToken {
            account: "acc".to_string(),
            mint: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            amount: 1_500_000,
            decimals: 6,
        };
        assert!((token.ui_amount() - 1.5).abs() < f64::EPSILON);
        assert!(!token.is_empty());
    }
}
