//! Serializable results shared by the table and JSON outputs.

use adaptive_irm::math::{rate_to_apr, rate_to_apy, rate_to_f64};
use adaptive_irm::BorrowRateResult;
use alloy_primitives::U256;
use serde::Serialize;

/// Result of a single `quote`.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteReport {
    pub utilization: U256,
    /// `None` on a market's first touch
    pub start_rate_at_target: Option<U256>,
    pub elapsed: u64,
    pub avg_borrow_rate: U256,
    pub end_borrow_rate: U256,
    pub end_rate_at_target: U256,
    pub avg_apr: f64,
    pub avg_apy: f64,
    pub end_apr: f64,
}

impl QuoteReport {
    pub fn new(
        utilization: U256,
        start_rate_at_target: Option<U256>,
        elapsed: u64,
        result: &BorrowRateResult,
    ) -> Self {
        Self {
            utilization,
            start_rate_at_target,
            elapsed,
            avg_borrow_rate: result.avg_borrow_rate,
            end_borrow_rate: result.end_borrow_rate,
            end_rate_at_target: result.end_rate_at_target,
            avg_apr: rate_to_apr(result.avg_borrow_rate),
            avg_apy: rate_to_apy(result.avg_borrow_rate),
            end_apr: rate_to_apr(result.end_borrow_rate),
        }
    }

    pub fn utilization_ratio(&self) -> f64 {
        rate_to_f64(self.utilization)
    }
}

/// One update of a `simulate` run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationStep {
    pub step: u32,
    /// Seconds since the start of the run
    pub time: u64,
    pub total_supply_assets: u128,
    pub total_borrow_assets: u128,
    pub utilization: U256,
    pub avg_borrow_rate: U256,
    pub rate_at_target: U256,
    pub avg_apr: f64,
    pub rate_at_target_apr: f64,
}

impl SimulationStep {
    pub fn utilization_ratio(&self) -> f64 {
        rate_to_f64(self.utilization)
    }
}
