pub mod supply;

pub use supply::{GetSupplyUseCase, RefreshOutcome, RefreshSupplyUseCase};
