//! # Market Routes
//!
//! The selected market lives in the `name` query parameter of `/`, so picking
//! a market is a client-side URL change (`/?name=SOL-PERP`) rather than a
//! page load. These helpers build those links and decide which one is
//! highlighted.

use crate::markets::INITIAL_MARKET;

/// Query key carrying the selected market name.
pub const MARKET_QUERY_KEY: &str = "name";

/// Link target selecting `market_name`.
///
/// ```rust
/// use lib_core::route::market_href;
///
/// assert_eq!(market_href("BTC-PERP"), "/?name=BTC-PERP");
/// assert_eq!(market_href("SOL/USDC"), "/?name=SOL%2FUSDC");
/// ```
pub fn market_href(market_name: &str) -> String {
    format!("/?{}={}", MARKET_QUERY_KEY, urlencoding::encode(market_name))
}

/// Read `key` from a raw query string (`?a=1&b=2`, leading `?` optional).
///
/// A key present without a value yields an empty string.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    if query.is_empty() {
        return None;
    }

    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        let param_key = parts.next().unwrap_or_default();
        if param_key != key {
            continue;
        }
        return Some(match parts.next() {
            Some(value) => urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string()),
            None => String::new(),
        });
    }

    None
}

/// Market selected by the query string, if any.
pub fn selected_market(search: &str) -> Option<String> {
    query_param(search, MARKET_QUERY_KEY).filter(|name| !name.is_empty())
}

/// Whether the link for `market_name` is the highlighted one.
///
/// The `name` parameter must match exactly; with no parameter on `/` the
/// initial market is highlighted.
pub fn is_active_market(pathname: &str, search: &str, market_name: &str) -> bool {
    match selected_market(search) {
        Some(selected) => selected == market_name,
        None => pathname == "/" && market_name == INITIAL_MARKET,
    }
}
