//! Application constants

pub const SWAP_PATH: &str = "/swap";

/// Element id prefix of the swap widget mount point; a uuid is appended.
pub const JUPITER_TARGET_PREFIX: &str = "integrated-terminal";

// Balance list
pub const MAX_BALANCE_DECIMALS: usize = 6;
pub const MARKET_ICON_SIZE_PX: u32 = 16;
