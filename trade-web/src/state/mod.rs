//! Reactive contexts provided by [`crate::app::App`].

pub mod favorites;
pub mod i18n;
pub mod market;
pub mod wallet;
