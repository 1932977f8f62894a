//! # Shared Data Transfer Objects Library
//!
//! Types shared between the platform-independent core (`lib-core`) and the
//! browser front end (`trade-web`). Everything here is plain data with
//! `serde` derives so it can be written to browser storage, read from RPC
//! payloads and passed across the JS boundary.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::market`]**: Market descriptors (spot pairs and perpetuals)
//!   - **[`dto::wallet`]**: Wallet token balances
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! Market descriptors serialize with **camelCase** field names
//! (`name`, `baseSymbol`, `marketIndex`) because that is the shape already
//! present in users' `favoriteMarkets` storage slot.
//!
//! ```rust
//! use shared::dto::market::MarketConfig;
//!
//! let market = MarketConfig::new("SOL-PERP", "SOL", 3);
//! let json = serde_json::to_string(&market).unwrap();
//! assert_eq!(json, r#"{"name":"SOL-PERP","baseSymbol":"SOL","marketIndex":3}"#);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
