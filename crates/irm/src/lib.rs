//! Adaptive Curve Interest Rate Model
//!
//! Borrow-rate models for isolated lending markets. The adaptive model prices
//! borrowing along a utilization curve and slowly moves the curve so that
//! markets drift toward their target utilization; the fixed-rate model
//! returns one admin-set rate.
//!
//! # Overview
//!
//! - [`math`]: WAD fixed-point helpers and the truncated exponential
//! - [`market`]: market parameters, identity hashing and utilization
//! - [`curve`]: the pure curve engine
//! - [`adaptive`]: the stateful service with authorization and events
//! - [`fixed`]: the fixed-rate model
//!
//! # Example
//!
//! ```rust
//! use adaptive_irm::{curve::borrow_rate, get_utilization, math::rate_to_apr, CurveConfig};
//!
//! let config = CurveConfig::default();
//! let utilization = get_utilization(1_000_000, 950_000);
//! let result = borrow_rate(&config, utilization, None, 0);
//!
//! // Above target the rate is above the initial 4% APR
//! assert!(rate_to_apr(result.avg_borrow_rate) > 0.04);
//! ```

pub mod adaptive;
pub mod clock;
pub mod config;
pub mod curve;
pub mod error;
pub mod events;
pub mod fixed;
pub mod market;
pub mod math;
pub mod model;
pub mod store;

// Re-export commonly used types
pub use adaptive::AdaptiveCurveIrm;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CurveConfig, MAX_CURVE_STEEPNESS};
pub use error::{IrmError, Result};
pub use events::{BorrowRateUpdate, EventSink, IrmEvent, RateSet, TracingSink};
pub use fixed::{FixedRateIrm, MAX_BORROW_RATE};
pub use model::InterestRateModel;
pub use store::{InMemoryRateStore, RateStore};

// Market exports
pub use market::{
    borrow_for_utilization, compute_market_id, get_utilization, MarketId, MarketParams,
    MarketState,
};

// Math exports
pub use math::{SECONDS_PER_YEAR, WAD};

// Curve exports
pub use curve::{
    borrow_rate, BorrowRateResult, UtilizationError, ADJUSTMENT_SPEED, CURVE_STEEPNESS,
    INITIAL_RATE_AT_TARGET, MAX_RATE_AT_TARGET, MIN_RATE_AT_TARGET, TARGET_UTILIZATION,
};
