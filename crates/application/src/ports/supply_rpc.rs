use async_trait::async_trait;
use coin_supply_domain::{DomainError, SupplyStats};

/// Application-layer port for the daemon's JSON-RPC interface.
///
/// Implementations perform exactly one request per call and never retry;
/// retrying is the refresh job's concern.
#[async_trait]
pub trait SupplyRpcClient: Send + Sync {
    /// Current chain height.
    async fn get_block_count(&self) -> Result<u64, DomainError>;

    /// Cumulative emission and fees over `count` blocks starting at `height`.
    async fn get_coinbase_tx_sum(&self, height: u64, count: u64)
        -> Result<SupplyStats, DomainError>;
}
