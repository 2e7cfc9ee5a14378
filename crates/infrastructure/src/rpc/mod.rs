pub mod daemon_client;
pub mod envelope;

pub use daemon_client::DaemonRpcClient;
pub use envelope::{JsonRpcRequest, JsonRpcResponse};
