//! Page modules

pub mod swap;
pub mod trade;

pub use swap::SwapPage;
pub use trade::TradePage;
