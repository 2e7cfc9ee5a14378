//! Coin Supply Domain Layer
pub mod config;
pub mod errors;
pub mod supply;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use supply::{format_supply, SupplyStats};
