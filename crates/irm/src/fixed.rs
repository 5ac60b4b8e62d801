//! Fixed-rate model: one admin-set rate, settable once.

use alloy_primitives::{Address, U256};
use tracing::warn;

use crate::error::{IrmError, Result};
use crate::events::{EventSink, RateSet, TracingSink};
use crate::market::{MarketParams, MarketState};
use crate::model::InterestRateModel;

/// Upper bound accepted by [`FixedRateIrm::set_borrow_rate`] (100 in WAD).
pub const MAX_BORROW_RATE: U256 = U256::from_limbs([0x6BC7_5E2D_6310_0000, 0x5, 0, 0]);

/// Rate model returning the same rate for every market and state.
#[derive(Debug, Clone)]
pub struct FixedRateIrm<E = TracingSink> {
    admin: Address,
    rate: U256,
    rate_updated: bool,
    events: E,
}

impl FixedRateIrm {
    pub fn new(admin: Address, rate: U256) -> Self {
        Self::with_sink(admin, rate, TracingSink)
    }
}

impl<E: EventSink> FixedRateIrm<E> {
    pub fn with_sink(admin: Address, rate: U256, events: E) -> Self {
        Self {
            admin,
            rate,
            rate_updated: false,
            events,
        }
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn rate(&self) -> U256 {
        self.rate
    }

    /// Whether [`set_borrow_rate`](Self::set_borrow_rate) has succeeded.
    pub fn is_rate_updated(&self) -> bool {
        self.rate_updated
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    /// Replace the rate. Succeeds at most once.
    ///
    /// The emitted [`RateSet`] reports the rate in force before this call as
    /// `old_rate`. Deployments whose event carried the new rate in both
    /// fields are intentionally not reproduced.
    ///
    /// # Errors
    ///
    /// - [`IrmError::NotAuthorized`] if `caller` is not the admin
    /// - [`IrmError::RateAlreadySet`] if the rate was set before
    /// - [`IrmError::InvalidRate`] if `new_rate` exceeds [`MAX_BORROW_RATE`]
    pub fn set_borrow_rate(&mut self, caller: Address, new_rate: U256) -> Result<()> {
        if caller != self.admin {
            warn!(%caller, admin = %self.admin, "set_borrow_rate rejected");
            return Err(IrmError::NotAuthorized {
                caller,
                controller: self.admin,
            });
        }
        if self.rate_updated {
            return Err(IrmError::RateAlreadySet);
        }
        if new_rate > MAX_BORROW_RATE {
            return Err(IrmError::InvalidRate {
                rate: new_rate,
                max: MAX_BORROW_RATE,
            });
        }

        let old_rate = self.rate;
        self.rate = new_rate;
        self.rate_updated = true;

        self.events.emit(
            RateSet {
                setter: caller,
                old_rate,
                new_rate,
            }
            .into(),
        );

        Ok(())
    }
}

impl<E: EventSink> InterestRateModel for FixedRateIrm<E> {
    fn quote(&self, _params: &MarketParams, _state: &MarketState) -> Result<U256> {
        Ok(self.rate)
    }

    /// Nothing to adapt: any caller gets the fixed rate.
    fn update(&mut self, _caller: Address, _params: &MarketParams, _state: &MarketState) -> Result<U256> {
        Ok(self.rate)
    }
}
