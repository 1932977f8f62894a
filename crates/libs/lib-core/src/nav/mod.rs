//! # Market Navigation Menu
//!
//! State behind the "Trade" dropdown: open/closed state, the hover debounce,
//! the category tabs and which markets each tab lists.
//!
//! - [`hover`] - delayed open/close on pointer enter/leave
//! - [`category`] - the Favorites / Spot / Perp tabs
//! - [`menu`] - [`NavMenu`], tying both to the favorites list

pub mod category;
pub mod hover;
pub mod menu;

pub use category::{CategoryKind, MenuCategory};
pub use hover::{HoverAction, HoverDebounce, HoverState, TimerCommand};
pub use menu::NavMenu;
