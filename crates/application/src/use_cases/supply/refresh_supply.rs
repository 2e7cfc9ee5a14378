use crate::ports::SupplyRpcClient;
use crate::services::SupplyCache;
use coin_supply_domain::{DomainError, SupplyStats};
use std::sync::Arc;
use tracing::{debug, error, info};

/// The coinbase sum always starts at the first block after genesis.
const FIRST_SUMMED_HEIGHT: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub height: u64,
    pub stats: SupplyStats,
}

/// Use case: fetch the chain-wide coinbase sum and store it in the cache.
///
/// Either both RPC calls succeed and the cache is replaced, or the cache is
/// left untouched.
pub struct RefreshSupplyUseCase {
    rpc: Arc<dyn SupplyRpcClient>,
    cache: Arc<SupplyCache>,
}

impl RefreshSupplyUseCase {
    pub fn new(rpc: Arc<dyn SupplyRpcClient>, cache: Arc<SupplyCache>) -> Self {
        Self { rpc, cache }
    }

    pub async fn execute(&self) -> Result<RefreshOutcome, DomainError> {
        debug!("Fetching block count");

        let height = self.rpc.get_block_count().await.map_err(|e| {
            error!(step = "get_block_count", error = %e, "Error getting block count");
            e
        })?;

        let stats = self
            .rpc
            .get_coinbase_tx_sum(FIRST_SUMMED_HEIGHT, height)
            .await
            .map_err(|e| {
                error!(step = "get_coinbase_tx_sum", height, error = %e, "Error fetching coinbase sum");
                e
            })?;

        self.cache.write(stats).await;

        info!(
            height,
            emission = stats.emission_amount,
            fee = stats.fee_amount,
            "Supply cache refreshed"
        );
        Ok(RefreshOutcome { height, stats })
    }
}
