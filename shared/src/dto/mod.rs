//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`market`] - Market descriptors as supplied by the group configuration
//! - [`wallet`] - Token balances held by the connected wallet
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, matching the JSON already stored by the web client
//! - **Unknown fields**: ignored on read (older favorites carried extra keys)
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod market;
pub mod wallet;

pub use market::*;
pub use wallet::*;
