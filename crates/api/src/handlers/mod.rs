pub mod health;
pub mod supply;

pub use health::health_check;
pub use supply::{get_circulating_supply, get_circulation, get_total_supply};
