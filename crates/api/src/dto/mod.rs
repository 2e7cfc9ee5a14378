pub mod supply;

pub use supply::SupplyResponse;
