pub mod get_supply;
pub mod refresh_supply;

pub use get_supply::GetSupplyUseCase;
pub use refresh_supply::{RefreshOutcome, RefreshSupplyUseCase};
