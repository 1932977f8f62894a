//! HTTP calls: the wallet token fetch and the group risk-weight snapshot.

use gloo_net::http::Request;
use lib_core::leverage::GroupSnapshot;
use lib_core::rpc::{parse_token_accounts, token_accounts_request};
use lib_core::swap::{Connection, PublicKey};
use lib_core::{AppError, Result};
use shared::dto::wallet::WalletToken;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

fn http_error(e: gloo_net::Error) -> AppError {
    AppError::Rpc(e.to_string())
}

/// SPL token balances owned by `owner`, read through `connection`.
pub async fn fetch_wallet_tokens(
    connection: &Connection,
    owner: &PublicKey,
) -> Result<Vec<WalletToken>> {
    let id = NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed);
    let body = token_accounts_request(owner, id);

    let response = Request::post(&connection.endpoint)
        .json(&body)
        .map_err(http_error)?
        .send()
        .await
        .map_err(http_error)?;

    if !response.ok() {
        return Err(AppError::Rpc(format!(
            "{} returned HTTP {}",
            connection.endpoint,
            response.status()
        )));
    }

    let text = response.text().await.map_err(http_error)?;
    parse_token_accounts(&text)
}

/// Risk weights of the trading group, served as JSON at `url`.
pub async fn fetch_group_snapshot(url: &str) -> Result<GroupSnapshot> {
    let response = Request::get(url).send().await.map_err(http_error)?;

    if !response.ok() {
        return Err(AppError::Rpc(format!("{} returned HTTP {}", url, response.status())));
    }

    let text = response.text().await.map_err(http_error)?;
    GroupSnapshot::from_json(&text)
}
