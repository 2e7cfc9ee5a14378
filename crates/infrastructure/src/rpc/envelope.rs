use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// The daemon echoes the id back but never relies on it.
pub const REQUEST_ID: &str = "0";

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<P>,
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub fn new(method: &'a str, params: Option<P>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        }
    }
}

/// Response envelope. `error` is `None` both when the field is absent and
/// when it is `null`.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<R> {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    pub result: Option<R>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CoinbaseTxSumParams {
    pub height: u64,
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct BlockCountResult {
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct CoinbaseTxSumResult {
    pub emission_amount: u64,
    pub fee_amount: u64,
}
