use crate::SupplyRefreshJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_supply_refresh(SupplyRefreshJob::new(refresh).with_interval(300))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    supply_refresh: Option<SupplyRefreshJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            supply_refresh: None,
        }
    }

    pub fn with_supply_refresh(mut self, job: SupplyRefreshJob) -> Self {
        self.supply_refresh = Some(job);
        self
    }

    /// Start all registered background jobs and return their task handles.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();
        if let Some(job) = self.supply_refresh {
            handles.push(Arc::new(job).start().await);
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
