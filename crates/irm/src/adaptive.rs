//! Borrow-rate service for the adaptive curve.
//!
//! [`AdaptiveCurveIrm`] owns the per-market rate-at-target store and wraps
//! the pure [`curve`](crate::curve) engine with authorization, time keeping
//! and event emission.
//!
//! # Example
//!
//! ```rust
//! use adaptive_irm::{
//!     AdaptiveCurveIrm, CurveConfig, InMemoryRateStore, IrmEvent, ManualClock, MarketParams,
//!     MarketState, INITIAL_RATE_AT_TARGET,
//! };
//! use alloy_primitives::{Address, U256};
//!
//! let controller = Address::repeat_byte(0xaa);
//! let mut irm = AdaptiveCurveIrm::with_parts(
//!     controller,
//!     CurveConfig::default(),
//!     InMemoryRateStore::new(),
//!     ManualClock::new(1_000),
//!     Vec::<IrmEvent>::new(),
//! )
//! .unwrap();
//!
//! let params = MarketParams {
//!     loan_token: Address::repeat_byte(0x01),
//!     collateral_token: Address::repeat_byte(0x02),
//!     oracle: Address::repeat_byte(0x03),
//!     irm: Address::repeat_byte(0x04),
//!     ltv: U256::from(750_000_000_000_000_000u64),
//! };
//! // 90% utilization, updated just now
//! let state = MarketState::with_totals(100, 90, 1_000);
//!
//! irm.init_interest(&params, &state);
//! let rate = irm.update(controller, &params, &state).unwrap();
//!
//! assert_eq!(rate, INITIAL_RATE_AT_TARGET);
//! assert_eq!(irm.events().len(), 1);
//! ```

use alloy_primitives::{Address, U256};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::CurveConfig;
use crate::curve::{self, BorrowRateResult};
use crate::error::{IrmError, Result};
use crate::events::{BorrowRateUpdate, EventSink, TracingSink};
use crate::market::{compute_market_id, MarketId, MarketParams, MarketState};
use crate::model::InterestRateModel;
use crate::store::{InMemoryRateStore, RateStore};

/// Adaptive curve interest rate model with a single controller.
#[derive(Debug, Clone)]
pub struct AdaptiveCurveIrm<S = InMemoryRateStore, C = SystemClock, E = TracingSink> {
    controller: Address,
    config: CurveConfig,
    store: S,
    clock: C,
    events: E,
}

impl AdaptiveCurveIrm {
    /// Model with default curve, in-memory store, system clock and events
    /// written to the log.
    pub fn new(controller: Address) -> Self {
        Self {
            controller,
            config: CurveConfig::default(),
            store: InMemoryRateStore::new(),
            clock: SystemClock,
            events: TracingSink,
        }
    }
}

impl<S: RateStore, C: Clock, E: EventSink> AdaptiveCurveIrm<S, C, E> {
    /// Assemble a model from its parts.
    ///
    /// # Errors
    ///
    /// - [`IrmError::InvalidConfig`] if `config` fails validation
    pub fn with_parts(controller: Address, config: CurveConfig, store: S, clock: C, events: E) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            controller,
            config,
            store,
            clock,
            events,
        })
    }

    /// The only address allowed to call [`update`](Self::update).
    pub fn controller(&self) -> Address {
        self.controller
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn compute_market_id(&self, params: &MarketParams) -> MarketId {
        compute_market_id(params)
    }

    /// Persisted rate at target, `None` before the market's first touch.
    pub fn rate_at_target(&self, params: &MarketParams) -> Option<U256> {
        self.store.get(&compute_market_id(params))
    }

    /// Create the market's entry with the initial rate at target.
    ///
    /// Anyone may call this; it writes exactly what a first update would.
    /// Returns `false` and changes nothing if the entry already exists.
    pub fn init_interest(&mut self, params: &MarketParams, state: &MarketState) -> bool {
        let id = compute_market_id(params);
        let created = self.store.init_if_absent(id, self.config.initial_rate_at_target);

        debug!(
            market_id = %id,
            created,
            utilization = %state.utilization(),
            "init_interest"
        );

        created
    }

    fn elapsed(&self, state: &MarketState) -> Result<u64> {
        let now = self.clock.now();
        state.elapsed_since_update(now).ok_or(IrmError::InvalidTimestamp {
            now,
            last_update: state.last_update,
        })
    }

    /// Full curve output for the market's current interval, without
    /// persisting anything.
    ///
    /// # Errors
    ///
    /// - [`IrmError::InvalidTimestamp`] if the clock is behind `state.last_update`
    pub fn preview(&self, params: &MarketParams, state: &MarketState) -> Result<BorrowRateResult> {
        let elapsed = self.elapsed(state)?;
        let start = self.store.get(&compute_market_id(params));
        Ok(curve::borrow_rate(&self.config, state.utilization(), start, elapsed))
    }

    /// Average borrow rate for the market's current interval. Read-only.
    pub fn quote(&self, params: &MarketParams, state: &MarketState) -> Result<U256> {
        let result = self.preview(params, state)?;
        debug!(
            market_id = %compute_market_id(params),
            avg_borrow_rate = %result.avg_borrow_rate,
            "quote"
        );
        Ok(result.avg_borrow_rate)
    }

    /// Compute the interval's average rate, persist the adapted rate at
    /// target and emit a [`BorrowRateUpdate`].
    ///
    /// # Errors
    ///
    /// - [`IrmError::NotAuthorized`] if `caller` is not the controller
    /// - [`IrmError::InvalidTimestamp`] if the clock is behind `state.last_update`
    ///
    /// On error nothing is written and nothing is emitted.
    pub fn update(&mut self, caller: Address, params: &MarketParams, state: &MarketState) -> Result<U256> {
        if caller != self.controller {
            warn!(%caller, controller = %self.controller, "update rejected");
            return Err(IrmError::NotAuthorized {
                caller,
                controller: self.controller,
            });
        }

        let elapsed = self.elapsed(state)?;
        let id = compute_market_id(params);
        let start = self.store.get(&id);
        let result = curve::borrow_rate(&self.config, state.utilization(), start, elapsed);

        match start {
            None => {
                self.store.init_if_absent(id, result.end_rate_at_target);
            }
            Some(_) => self.store.set(id, result.end_rate_at_target),
        }

        let event = BorrowRateUpdate {
            market_id: id,
            avg_borrow_rate: result.avg_borrow_rate,
            rate_at_target: result.end_rate_at_target,
        };
        self.events.emit(event.into());

        info!(
            market_id = %id,
            elapsed,
            first_touch = start.is_none(),
            avg_borrow_rate = %result.avg_borrow_rate,
            rate_at_target = %result.end_rate_at_target,
            "borrow rate updated"
        );

        Ok(result.avg_borrow_rate)
    }
}

impl<S: RateStore, C: Clock, E: EventSink> InterestRateModel for AdaptiveCurveIrm<S, C, E> {
    fn quote(&self, params: &MarketParams, state: &MarketState) -> Result<U256> {
        AdaptiveCurveIrm::quote(self, params, state)
    }

    fn update(&mut self, caller: Address, params: &MarketParams, state: &MarketState) -> Result<U256> {
        AdaptiveCurveIrm::update(self, caller, params, state)
    }
}
