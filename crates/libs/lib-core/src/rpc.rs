//! # Wallet Token RPC Payloads
//!
//! JSON-RPC body and response parsing for `getTokenAccountsByOwner`, the call
//! behind the wallet token fetch on the swap page. The HTTP round trip lives
//! in the web crate; building and parsing is here so it can be tested natively.

use serde::Deserialize;
use serde_json::{json, Value};
use shared::dto::wallet::WalletToken;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::swap::PublicKey;

/// SPL Token program id.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGqPMRu5xFYNoW7FHkQkEkh";

/// Request body listing every SPL token account owned by `owner`.
pub fn token_accounts_request(owner: &PublicKey, id: u64) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "getTokenAccountsByOwner",
        "params": [
            owner.to_string(),
            { "programId": TOKEN_PROGRAM_ID },
            { "encoding": "jsonParsed", "commitment": "confirmed" }
        ]
    })
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct ContextValue<T> {
    value: T,
}

#[derive(Deserialize)]
struct KeyedAccount {
    pubkey: String,
    account: ParsedAccount,
}

#[derive(Deserialize)]
struct ParsedAccount {
    data: ParsedData,
}

#[derive(Deserialize)]
struct ParsedData {
    parsed: ParsedInfo,
}

#[derive(Deserialize)]
struct ParsedInfo {
    info: TokenAccountInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenAccountInfo {
    mint: String,
    token_amount: TokenAmount,
}

#[derive(Deserialize)]
struct TokenAmount {
    amount: String,
    decimals: u8,
}

/// Parse a `getTokenAccountsByOwner` response into wallet tokens, in the
/// order the node returned them.
pub fn parse_token_accounts(body: &str) -> Result<Vec<WalletToken>> {
    let response: RpcResponse<ContextValue<Vec<KeyedAccount>>> = serde_json::from_str(body)?;

    if let Some(error) = response.error {
        return Err(AppError::Rpc(format!("{} (code {})", error.message, error.code)));
    }

    let accounts = response
        .result
        .ok_or_else(|| AppError::Rpc("response has neither result nor error".to_string()))?
        .value;

    let tokens = accounts
        .into_iter()
        .map(|keyed| {
            let info = keyed.account.data.parsed.info;
            let amount = info.token_amount.amount.parse::<u64>().map_err(|e| {
                AppError::Decoding(format!("token amount {:?}: {}", info.token_amount.amount, e))
            })?;
            Ok(WalletToken {
                account: keyed.pubkey,
                mint: info.mint,
                amount,
                decimals: info.token_amount.decimals,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(count = tokens.len(), "parsed wallet token accounts");
    Ok(tokens)
}
