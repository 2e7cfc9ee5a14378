use coin_supply_domain::SupplyStats;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Last successfully fetched supply figures.
///
/// `last_update` is `None` until the first successful refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachedSupplyStats {
    pub stats: SupplyStats,
    pub last_update: Option<Instant>,
}

/// In-memory supply cache shared by the refresh job (single writer) and the
/// HTTP handlers (readers).
///
/// The lock only ever guards a copy or a replace of the record.
pub struct SupplyCache {
    inner: Mutex<CachedSupplyStats>,
    stale_after: Duration,
}

impl SupplyCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            inner: Mutex::new(CachedSupplyStats::default()),
            stale_after,
        }
    }

    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }

    /// Returns a copy of the cached stats and whether they are stale.
    pub async fn read(&self) -> (SupplyStats, bool) {
        let cached = *self.inner.lock().await;
        (cached.stats, self.is_stale(cached.last_update))
    }

    /// Replaces the cached stats and stamps them with the current time.
    pub async fn write(&self, stats: SupplyStats) {
        let mut cached = self.inner.lock().await;
        *cached = CachedSupplyStats {
            stats,
            last_update: Some(Instant::now()),
        };
    }

    pub async fn snapshot(&self) -> CachedSupplyStats {
        *self.inner.lock().await
    }

    fn is_stale(&self, last_update: Option<Instant>) -> bool {
        match last_update {
            Some(at) => at.elapsed() > self.stale_after,
            None => true,
        }
    }
}
