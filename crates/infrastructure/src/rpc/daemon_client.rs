use super::envelope::{
    BlockCountResult, CoinbaseTxSumParams, CoinbaseTxSumResult, JsonRpcRequest, JsonRpcResponse,
};
use async_trait::async_trait;
use coin_supply_application::ports::SupplyRpcClient;
use coin_supply_domain::{DomainError, SupplyStats};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const METHOD_GET_BLOCK_COUNT: &str = "get_block_count";
const METHOD_GET_COINBASE_TX_SUM: &str = "get_coinbase_tx_sum";

/// JSON-RPC client for the coin daemon.
///
/// One POST per call, bounded by `timeout` (send and body read together).
pub struct DaemonRpcClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl DaemonRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(1)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            url: url.into(),
            timeout,
        }
    }

    async fn call<P, R>(&self, method: &str, params: Option<P>) -> Result<R, DomainError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(&JsonRpcRequest::new(method, params)).map_err(|e| {
            DomainError::Protocol(format!("Failed to encode {} request: {}", method, e))
        })?;

        debug!(url = %self.url, method, "Sending JSON-RPC request");

        let (status, bytes) = tokio::time::timeout(self.timeout, async {
            let response = self
                .client
                .post(&self.url)
                .header("Content-Type", "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, bytes))
        })
        .await
        .map_err(|_| {
            DomainError::Transport(format!("Timeout calling {} on {}", method, self.url))
        })?
        .map_err(|e| {
            DomainError::Transport(format!("{} request to {} failed: {}", method, self.url, e))
        })?;

        debug!(
            method,
            status = status.as_u16(),
            response_len = bytes.len(),
            "JSON-RPC response received"
        );

        // The body decides success; the HTTP status only explains an
        // unreadable one.
        let envelope: JsonRpcResponse<R> = serde_json::from_slice(&bytes).map_err(|e| {
            if status.is_success() {
                DomainError::Protocol(format!("Malformed {} response: {}", method, e))
            } else {
                DomainError::Transport(format!(
                    "{} returned HTTP {}: {}",
                    self.url,
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ))
            }
        })?;

        if let Some(error) = envelope.error {
            return Err(DomainError::Rpc(format!("{}: {}", method, error)));
        }

        envelope
            .result
            .ok_or_else(|| DomainError::Protocol(format!("{} response has no result", method)))
    }
}

#[async_trait]
impl SupplyRpcClient for DaemonRpcClient {
    async fn get_block_count(&self) -> Result<u64, DomainError> {
        let result: BlockCountResult = self.call(METHOD_GET_BLOCK_COUNT, None::<()>).await?;
        Ok(result.count)
    }

    async fn get_coinbase_tx_sum(
        &self,
        height: u64,
        count: u64,
    ) -> Result<SupplyStats, DomainError> {
        let result: CoinbaseTxSumResult = self
            .call(
                METHOD_GET_COINBASE_TX_SUM,
                Some(CoinbaseTxSumParams { height, count }),
            )
            .await?;
        Ok(SupplyStats::new(result.emission_amount, result.fee_amount))
    }
}
