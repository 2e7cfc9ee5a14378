//! Supply figures derived from the daemon's cumulative coinbase sum.
//!
//! All amounts reported by the daemon are in atomic units; display units are
//! obtained by dividing by [`ATOMIC_UNITS_PER_COIN`].

use serde::{Deserialize, Serialize};

/// 10^12 atomic units make one coin.
pub const ATOMIC_UNITS_PER_COIN: u64 = 1_000_000_000_000;

/// Coins released outside of block rewards: first airdrop (2500),
/// community tasks (7000) and the first month of dev team rewards (5000).
pub const RELEASED_SUPPLY: u64 = 2_500 + 7_000 + 5_000;

/// Reward of the genesis block, which the coinbase sum starting at height 1
/// does not include.
pub const GENESIS_BLOCK_REWARD: f64 = 553_402.319_999_999_949;

/// Fractional digits used for every decimal supply figure.
pub const SUPPLY_DECIMALS: usize = 12;

/// Cumulative emission and fees over a height range, as returned by
/// `get_coinbase_tx_sum`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyStats {
    pub emission_amount: u64,
    pub fee_amount: u64,
}

impl SupplyStats {
    pub fn new(emission_amount: u64, fee_amount: u64) -> Self {
        Self {
            emission_amount,
            fee_amount,
        }
    }

    /// Emission plus fees in atomic units. Widened so the sum cannot wrap.
    pub fn total_atomic(&self) -> u128 {
        self.emission_amount as u128 + self.fee_amount as u128
    }

    /// Whole coins in circulation, truncated, plus the released supply.
    pub fn circulation(&self) -> u128 {
        self.total_atomic() / ATOMIC_UNITS_PER_COIN as u128 + RELEASED_SUPPLY as u128
    }

    pub fn circulating_supply(&self) -> f64 {
        self.coins() + RELEASED_SUPPLY as f64
    }

    pub fn total_supply(&self) -> f64 {
        self.coins() + GENESIS_BLOCK_REWARD
    }

    fn coins(&self) -> f64 {
        self.total_atomic() as f64 / ATOMIC_UNITS_PER_COIN as f64
    }
}

/// Fixed-point rendering with exactly [`SUPPLY_DECIMALS`] fractional digits.
///
/// Never uses scientific notation and does not depend on locale.
pub fn format_supply(value: f64) -> String {
    format!("{:.*}", SUPPLY_DECIMALS, value)
}
