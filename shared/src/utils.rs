//! # Shared Utility Functions
//!
//! Display helpers used by both the core and the web front end.
//!
//! - [`format_address`] - Shorten an address to `prefix...suffix`
//! - [`truncate_address`] - [`format_address`] with 4/4 characters
//! - [`format_leverage`] - Render a leverage multiplier as `"10x"`
//!
//! ```rust
//! use shared::utils::{format_leverage, truncate_address};
//!
//! assert_eq!(truncate_address("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL"), "8W6Q...JKAL");
//! assert_eq!(format_leverage(3.33), "3.33x");
//! ```

/// Shorten a wallet address to its first `prefix_len` and last `suffix_len`
/// characters.
///
/// Addresses too short to shorten are returned unchanged.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// [`format_address`] with a 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Render a leverage multiplier the way the market menu shows it.
///
/// Whole numbers print without decimals (`10x`), everything else keeps up
/// to two decimals with trailing zeros dropped (`2.5x`, `3.33x`).
pub fn format_leverage(leverage: f64) -> String {
    let rounded = (leverage * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}x", text)
}
