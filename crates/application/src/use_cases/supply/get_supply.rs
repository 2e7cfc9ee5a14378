use crate::services::SupplyCache;
use coin_supply_domain::{DomainError, SupplyStats};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case: read the cached supply figures, refusing stale data.
pub struct GetSupplyUseCase {
    cache: Arc<SupplyCache>,
}

impl GetSupplyUseCase {
    pub fn new(cache: Arc<SupplyCache>) -> Self {
        Self { cache }
    }

    pub async fn execute(&self) -> Result<SupplyStats, DomainError> {
        let (stats, is_stale) = self.cache.read().await;

        if is_stale {
            warn!(
                stale_after_secs = self.cache.stale_after().as_secs(),
                "Supply cache is outdated"
            );
            return Err(DomainError::StaleCache);
        }

        debug!(
            emission = stats.emission_amount,
            fee = stats.fee_amount,
            "Serving cached supply"
        );
        Ok(stats)
    }
}
