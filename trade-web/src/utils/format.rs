//! # Formatting Utilities for Trade Web
//!
//! Number formatting for the balance list. For addresses use
//! [`shared::utils::truncate_address`]; for leverage use
//! [`shared::utils::format_leverage`].

use shared::dto::wallet::WalletToken;

use super::constants::MAX_BALANCE_DECIMALS;

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use trade_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, decimal),
        None => (formatted.as_str(), ""),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Token balance with at most [`MAX_BALANCE_DECIMALS`] places, trailing zeros dropped.
pub fn format_token_amount(token: &WalletToken) -> String {
    let places = usize::from(token.decimals).min(MAX_BALANCE_DECIMALS);
    let formatted = format_number(token.ui_amount(), places);
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(amount: u64, decimals: u8) -> WalletToken {
        WalletToken {
            account: "acc".to_string(),
            mint: "mint".to_string(),
            amount,
            decimals,
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(&token(2_500_000, 6)), "2.5");
        assert_eq!(format_token_amount(&token(1_234_000_000_000, 9)), "1,234");
        assert_eq!(format_token_amount(&token(42, 0)), "42");
        assert_eq!(format_token_amount(&token(0, 6)), "0");
    }
}
