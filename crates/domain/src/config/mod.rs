//! Configuration module for the coin supply service
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP listener binding
//! - `rpc`: Daemon JSON-RPC endpoint
//! - `refresh`: Refresh interval and staleness threshold
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod refresh;
pub mod root;
pub mod rpc;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use refresh::RefreshConfig;
pub use root::{CliOverrides, Config};
pub use rpc::RpcConfig;
pub use server::ServerConfig;
