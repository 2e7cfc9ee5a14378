#![allow(dead_code)]

use async_trait::async_trait;
use coin_supply_application::ports::SupplyRpcClient;
use coin_supply_domain::{DomainError, SupplyStats};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock SupplyRpcClient
// ============================================================================

pub struct MockSupplyRpcClient {
    height: Arc<RwLock<u64>>,
    stats: Arc<RwLock<SupplyStats>>,
    block_count_error: Arc<RwLock<Option<DomainError>>>,
    coinbase_error: Arc<RwLock<Option<DomainError>>>,
    last_range: Arc<RwLock<Option<(u64, u64)>>>,
    block_count_calls: Arc<AtomicU64>,
    coinbase_calls: Arc<AtomicU64>,
}

impl MockSupplyRpcClient {
    pub fn new() -> Self {
        Self::with_chain(0, SupplyStats::default())
    }

    pub fn with_chain(height: u64, stats: SupplyStats) -> Self {
        Self {
            height: Arc::new(RwLock::new(height)),
            stats: Arc::new(RwLock::new(stats)),
            block_count_error: Arc::new(RwLock::new(None)),
            coinbase_error: Arc::new(RwLock::new(None)),
            last_range: Arc::new(RwLock::new(None)),
            block_count_calls: Arc::new(AtomicU64::new(0)),
            coinbase_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_chain(&self, height: u64, stats: SupplyStats) {
        *self.height.write().await = height;
        *self.stats.write().await = stats;
    }

    pub async fn fail_block_count(&self, error: Option<DomainError>) {
        *self.block_count_error.write().await = error;
    }

    pub async fn fail_coinbase(&self, error: Option<DomainError>) {
        *self.coinbase_error.write().await = error;
    }

    pub async fn last_range(&self) -> Option<(u64, u64)> {
        *self.last_range.read().await
    }

    pub fn block_count_calls(&self) -> u64 {
        self.block_count_calls.load(Ordering::Relaxed)
    }

    pub fn coinbase_calls(&self) -> u64 {
        self.coinbase_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SupplyRpcClient for MockSupplyRpcClient {
    async fn get_block_count(&self) -> Result<u64, DomainError> {
        self.block_count_calls.fetch_add(1, Ordering::Relaxed);

        if let Some(e) = self.block_count_error.read().await.clone() {
            return Err(e);
        }
        Ok(*self.height.read().await)
    }

    async fn get_coinbase_tx_sum(
        &self,
        height: u64,
        count: u64,
    ) -> Result<SupplyStats, DomainError> {
        self.coinbase_calls.fetch_add(1, Ordering::Relaxed);
        *self.last_range.write().await = Some((height, count));

        if let Some(e) = self.coinbase_error.read().await.clone() {
            return Err(e);
        }
        Ok(*self.stats.read().await)
    }
}
