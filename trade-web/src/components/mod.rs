//! UI Components

pub mod favorite_button;
pub mod jupiter_form;
pub mod menu_categories;
pub mod navbar;
pub mod trade_nav_menu;
pub mod wallet_button;

pub use favorite_button::FavoriteMarketButton;
pub use jupiter_form::JupiterForm;
pub use navbar::Navbar;
