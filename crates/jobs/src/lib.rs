pub mod runner;
pub mod supply_refresh;

pub use runner::JobRunner;
pub use supply_refresh::SupplyRefreshJob;
