pub mod supply_cache;

pub use supply_cache::{CachedSupplyStats, SupplyCache};
