//! # Core Library
//!
//! Platform-independent core of the trade web client: configuration, the
//! error type, market configuration, the favorites store, the navigation
//! menu and hover-debounce state machines, leverage computation, the icon
//! table, route helpers, translations and the swap-page logic.
//!
//! Nothing in here touches the DOM. The `trade-web` crate drives these types
//! from Leptos signals and browser events; tests drive them directly with
//! millisecond timestamps and an in-memory storage backend.

pub mod config;
pub mod error;
pub mod i18n;
pub mod icons;
pub mod leverage;
pub mod markets;
pub mod model;
pub mod nav;
pub mod route;
pub mod rpc;
pub mod swap;

// Re-export commonly used types
pub use config::TradeConfig;
pub use error::{AppError, Result};
pub use model::store::{FavoritesStore, JsonFavoritesStore, KeyValueStorage};
