//! Test helper utilities for rate model integration tests.

use adaptive_irm::{
    AdaptiveCurveIrm, CurveConfig, InMemoryRateStore, IrmEvent, ManualClock, MarketParams,
    MarketState,
};
use alloy_primitives::{Address, U256};

pub type TestIrm = AdaptiveCurveIrm<InMemoryRateStore, ManualClock, Vec<IrmEvent>>;

pub const CONTROLLER: Address = Address::repeat_byte(0xc0);
pub const STRANGER: Address = Address::repeat_byte(0xbe);

/// Start time used by every scenario.
pub const T0: u64 = 1_700_000_000;

pub const ONE_HOUR: u64 = 3_600;
pub const ONE_DAY: u64 = 86_400;

/// 1 token at 18 decimals.
pub const ONE: u128 = 1_000_000_000_000_000_000;

/// Adaptive model on a manual clock at [`T0`] collecting events in a `Vec`.
pub fn adaptive_irm() -> TestIrm {
    AdaptiveCurveIrm::with_parts(
        CONTROLLER,
        CurveConfig::default(),
        InMemoryRateStore::new(),
        ManualClock::new(T0),
        Vec::new(),
    )
    .unwrap()
}

pub fn market_params() -> MarketParams {
    MarketParams {
        loan_token: Address::repeat_byte(0x01),
        collateral_token: Address::repeat_byte(0x02),
        oracle: Address::repeat_byte(0x03),
        irm: Address::repeat_byte(0x04),
        ltv: U256::from(860_000_000_000_000_000u64),
    }
}

/// Same assets with a different LTV, hence a different market.
pub fn other_market_params() -> MarketParams {
    MarketParams {
        ltv: U256::from(625_000_000_000_000_000u64),
        ..market_params()
    }
}

/// Market with `supply` and `borrow` (shares equal assets) last updated at `last_update`.
pub fn state(supply: u128, borrow: u128, last_update: u64) -> MarketState {
    MarketState::with_totals(supply, borrow, last_update)
}

/// Borrow amount giving `percent`% utilization on `supply`.
pub fn borrow_at(supply: u128, percent: u128) -> u128 {
    supply * percent / 100
}

/// Assert `actual` is within `tolerance` (relative) of `expected`.
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let deviation = ((actual - expected) / expected).abs();
    assert!(
        deviation <= tolerance,
        "expected {expected} within {tolerance}, got {actual} (deviation {deviation})"
    );
}
