//! # Model
//!
//! Persistence layer of the core. The only persisted model is the user's
//! list of favorite markets; see [`store`].

pub mod store;
