use serde::{Deserialize, Serialize};

/// Daemon JSON-RPC endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcConfig {
    /// Full JSON-RPC URL (default: "http://127.0.0.1:20241/json_rpc")
    #[serde(default = "default_url")]
    pub url: String,

    /// Deadline for a single RPC call in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    "http://127.0.0.1:20241/json_rpc".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
