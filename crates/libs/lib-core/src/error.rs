//! # Centralized Error Handling
//!
//! Application-wide error type [`AppError`] for the core library, built with
//! `thiserror`.
//!
//! None of these errors reach the user as such. The web layer logs them and
//! falls back silently: an unreadable favorites slot reads as an empty list,
//! a failed token fetch keeps the previous balances, a missing risk snapshot
//! shows `1x` leverage.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_delay(raw: &str) -> Result<u32> {
//!     raw.parse()
//!         .map_err(|_| AppError::Config(format!("invalid hover delay: {}", raw)))
//! }
//!
//! assert!(parse_delay("200").is_ok());
//! assert!(parse_delay("soon").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type covering the core library.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error while reading or validating [`crate::config::TradeConfig`].
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persistent key-value storage is unavailable or rejected a write
    /// (quota exceeded, private browsing).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Malformed JSON or base58 payload.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// JSON-RPC node returned an error object or an unexpected shape.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Invalid caller-supplied value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

impl From<bs58::decode::Error> for AppError {
    fn from(err: bs58::decode::Error) -> Self {
        AppError::Decoding(format!("base58 error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::Storage("quota exceeded".to_string()).to_string(),
            "Storage error: quota exceeded"
        );
        assert_eq!(
            AppError::Rpc("node is behind".to_string()).to_string(),
            "RPC error: node is behind"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err: AppError = serde_json::from_str::<Vec<u8>>("not json").unwrap_err().into();
        assert!(matches!(err, AppError::Decoding(_)));
    }
}
