//! Interface shared by every rate model a market can be configured with.

use alloy_primitives::{Address, U256};

use crate::error::Result;
use crate::market::{MarketParams, MarketState};

/// A borrow-rate source for lending markets.
///
/// Rates are WAD-scaled per-second values.
pub trait InterestRateModel {
    /// Borrow rate for the market's current interval. Never mutates state.
    fn quote(&self, params: &MarketParams, state: &MarketState) -> Result<U256>;

    /// Borrow rate for the interval, committing any state the model keeps.
    fn update(&mut self, caller: Address, params: &MarketParams, state: &MarketState) -> Result<U256>;
}
