use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Cache is outdated")]
    StaleCache,
}
