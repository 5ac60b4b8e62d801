//! Structured records emitted by the rate models.

use alloy_primitives::{Address, U256};
use serde::Serialize;

use crate::market::MarketId;

/// Emitted on every successful adaptive-rate update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorrowRateUpdate {
    pub market_id: MarketId,
    /// Rate charged for the elapsed interval
    pub avg_borrow_rate: U256,
    /// Persisted rate at target after the update
    pub rate_at_target: U256,
}

impl BorrowRateUpdate {
    /// Positional layout consumed by indexers:
    /// `[reserved (0), avg_borrow_rate, rate_at_target]`.
    pub fn fields(&self) -> [U256; 3] {
        [U256::ZERO, self.avg_borrow_rate, self.rate_at_target]
    }
}

/// Emitted when the fixed-rate model's rate is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateSet {
    pub setter: Address,
    pub old_rate: U256,
    pub new_rate: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "fields")]
pub enum IrmEvent {
    BorrowRateUpdate(BorrowRateUpdate),
    RateSet(RateSet),
}

impl IrmEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BorrowRateUpdate(_) => "BorrowRateUpdate",
            Self::RateSet(_) => "RateSet",
        }
    }
}

impl From<BorrowRateUpdate> for IrmEvent {
    fn from(event: BorrowRateUpdate) -> Self {
        Self::BorrowRateUpdate(event)
    }
}

impl From<RateSet> for IrmEvent {
    fn from(event: RateSet) -> Self {
        Self::RateSet(event)
    }
}

/// Destination for emitted events.
pub trait EventSink {
    fn emit(&mut self, event: IrmEvent);
}

/// Collects events in order.
impl EventSink for Vec<IrmEvent> {
    fn emit(&mut self, event: IrmEvent) {
        self.push(event);
    }
}

/// Writes each event to the `tracing` log and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: IrmEvent) {
        match event {
            IrmEvent::BorrowRateUpdate(e) => tracing::info!(
                market_id = %e.market_id,
                avg_borrow_rate = %e.avg_borrow_rate,
                rate_at_target = %e.rate_at_target,
                "BorrowRateUpdate"
            ),
            IrmEvent::RateSet(e) => tracing::info!(
                setter = %e.setter,
                old_rate = %e.old_rate,
                new_rate = %e.new_rate,
                "RateSet"
            ),
        }
    }
}
