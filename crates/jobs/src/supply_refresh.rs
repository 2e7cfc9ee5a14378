use coin_supply_application::use_cases::{RefreshOutcome, RefreshSupplyUseCase};
use coin_supply_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Periodically refreshes the supply cache from the daemon.
///
/// The first refresh runs as soon as the job starts. A failed refresh is
/// logged and retried on the next tick; there is no backoff.
pub struct SupplyRefreshJob {
    refresh: Arc<RefreshSupplyUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl SupplyRefreshJob {
    pub fn new(refresh: Arc<RefreshSupplyUseCase>) -> Self {
        Self {
            refresh,
            interval_secs: 300,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Runs a single refresh iteration. Failures are logged by the use case
    /// together with the step that failed.
    pub async fn run_once(&self) -> Result<RefreshOutcome, DomainError> {
        self.refresh.execute().await
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval_secs,
            "Starting supply refresh job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            // A slow daemon pushes the schedule back instead of causing a burst.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("SupplyRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let _ = self.run_once().await;
                    }
                }
            }
        })
    }
}
