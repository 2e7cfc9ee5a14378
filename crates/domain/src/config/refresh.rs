use serde::{Deserialize, Serialize};

/// Supply cache refresh settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Seconds between two refresh attempts (default: 300)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Age in seconds after which the cached figures are refused (default: 300)
    ///
    /// Equal to the interval by default, so a single failed refresh is enough
    /// to take the endpoints offline.
    #[serde(default = "default_stale_after_secs")]
    pub stale_after_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            stale_after_secs: default_stale_after_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    300
}

fn default_stale_after_secs() -> u64 {
    300
}
