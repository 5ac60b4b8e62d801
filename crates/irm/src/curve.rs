//! Adaptive curve engine.
//!
//! Maps `(rate_at_target, utilization, elapsed)` to the average borrow rate
//! for the interval and the adapted `rate_at_target`.
//!
//! # How the Curve Works
//!
//! ## 1. Normalized Error
//!
//! ```text
//! If utilization < target:  err = (utilization - target) / target
//! If utilization >= target: err = (utilization - target) / (1 - target)
//! ```
//!
//! `err` is -1 at zero utilization, 0 at target and +1 at full utilization.
//!
//! ## 2. The Curve Function
//!
//! ```text
//! err < 0:  rate = rate_at_target * (1 + (1 - 1/steepness) * err)   // 0.25x at err = -1
//! err >= 0: rate = rate_at_target * (1 + (steepness - 1) * err)     // 4x at err = +1
//! ```
//!
//! ## 3. Rate Adaptation
//!
//! ```text
//! rate_at_target' = clamp(rate_at_target * exp(speed * err * elapsed), MIN, MAX)
//! ```
//!
//! The exponential is `1 + x + x²/2 + x³/6` (see [`crate::math::w_exp`]).
//! No time or no error means no drift: the rate at target is returned as is.
//!
//! ## 4. Average Rate
//!
//! When the rate at target moved during the interval, the interval is charged
//! the mean of the curve at its start and end points. A utilization spike
//! held for one block therefore moves the accrual rate by at most half of
//! the adaptation.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_UTILIZATION` | 90% | Utilization at which the curve returns `rate_at_target` |
//! | `CURVE_STEEPNESS` | 4.0 | Rate multiplier at 100% utilization |
//! | `INITIAL_RATE_AT_TARGET` | 4% APR | Starting rate for new markets |
//! | `ADJUSTMENT_SPEED` | 50/year | How fast `rate_at_target` adapts |
//! | `MIN_RATE_AT_TARGET` | 0.1% APR | Lower bound on `rate_at_target` |
//! | `MAX_RATE_AT_TARGET` | 200% APR | Upper bound on `rate_at_target` |
//!
//! # Example
//!
//! ```rust
//! use adaptive_irm::curve::{borrow_rate, INITIAL_RATE_AT_TARGET, TARGET_UTILIZATION};
//! use adaptive_irm::CurveConfig;
//!
//! let config = CurveConfig::default();
//! let result = borrow_rate(&config, TARGET_UTILIZATION, Some(INITIAL_RATE_AT_TARGET), 86_400);
//!
//! // At target the rate is time-invariant
//! assert_eq!(result.avg_borrow_rate, INITIAL_RATE_AT_TARGET);
//! assert_eq!(result.end_rate_at_target, INITIAL_RATE_AT_TARGET);
//! ```

use alloy_primitives::U256;

use crate::config::CurveConfig;
use crate::math::{clamp, w_div_down, w_exp, w_mul_down, WAD};

/// Curve steepness parameter (4.0 in WAD)
pub const CURVE_STEEPNESS: U256 = U256::from_limbs([4_000_000_000_000_000_000, 0, 0, 0]);

/// Target utilization (90% in WAD = 0.9)
pub const TARGET_UTILIZATION: U256 = U256::from_limbs([900_000_000_000_000_000, 0, 0, 0]);

/// Initial rate at target (4% per year / SECONDS_PER_YEAR)
pub const INITIAL_RATE_AT_TARGET: U256 = U256::from_limbs([1_268_391_679, 0, 0, 0]);

/// Adjustment speed (50 per year / SECONDS_PER_YEAR)
///
/// Held above target for a full year at err = +1, `rate_at_target` would be
/// multiplied by roughly e^50 before clamping.
pub const ADJUSTMENT_SPEED: U256 = U256::from_limbs([1_585_489_599_188, 0, 0, 0]);

/// Minimum rate at target (0.1% per year / SECONDS_PER_YEAR)
pub const MIN_RATE_AT_TARGET: U256 = U256::from_limbs([31_709_791, 0, 0, 0]);

/// Maximum rate at target (200% per year / SECONDS_PER_YEAR)
pub const MAX_RATE_AT_TARGET: U256 = U256::from_limbs([63_419_583_967, 0, 0, 0]);

/// Signed distance of utilization from target, normalized to roughly [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilizationError {
    /// |err| in WAD
    pub magnitude: U256,
    /// Utilization is below target
    pub is_negative: bool,
}

impl UtilizationError {
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

/// Result of borrow rate calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowRateResult {
    /// Rate charged for the elapsed interval (WAD-scaled per second)
    pub avg_borrow_rate: U256,
    /// Instantaneous rate at the end of the interval
    pub end_borrow_rate: U256,
    /// Rate at target after the interval; the value to persist
    pub end_rate_at_target: U256,
}

/// Normalized utilization error.
pub fn utilization_error(config: &CurveConfig, utilization: U256) -> UtilizationError {
    let target = config.target_utilization;

    if utilization >= target {
        UtilizationError {
            magnitude: w_div_down(utilization - target, WAD - target),
            is_negative: false,
        }
    } else {
        UtilizationError {
            magnitude: w_div_down(target - utilization, target),
            is_negative: true,
        }
    }
}

/// Multiplier the curve applies to `rate_at_target` for a given error (WAD).
pub fn curve_multiplier(config: &CurveConfig, err: UtilizationError) -> U256 {
    if err.is_negative {
        let coeff = WAD - w_div_down(WAD, config.curve_steepness);
        WAD.saturating_sub(w_mul_down(coeff, err.magnitude))
    } else {
        let coeff = config.curve_steepness - WAD;
        WAD.saturating_add(w_mul_down(coeff, err.magnitude))
    }
}

/// Instantaneous borrow rate implied by `err` around `rate_at_target`.
pub fn apply_curve(config: &CurveConfig, rate_at_target: U256, err: UtilizationError) -> U256 {
    w_mul_down(curve_multiplier(config, err), rate_at_target)
}

/// Exponent of the adaptation, `speed * |err| * elapsed` (WAD).
fn linear_adaptation(config: &CurveConfig, err: UtilizationError, elapsed: u64) -> U256 {
    let speed = w_mul_down(config.adjustment_speed, err.magnitude);
    speed.saturating_mul(U256::from(elapsed))
}

/// Adapt `rate_at_target` over `elapsed` seconds at a constant error.
///
/// Returns the input untouched when the exponent is zero.
pub fn new_rate_at_target(
    config: &CurveConfig,
    rate_at_target: U256,
    err: UtilizationError,
    elapsed: u64,
) -> U256 {
    let adaptation = linear_adaptation(config, err, elapsed);
    if adaptation.is_zero() {
        return rate_at_target;
    }

    let growth = w_exp(adaptation, err.is_negative);
    clamp(
        w_mul_down(rate_at_target, growth),
        config.min_rate_at_target,
        config.max_rate_at_target,
    )
}

/// Calculates the borrow rate for the interval and the adapted rate at target.
///
/// # Arguments
///
/// * `utilization` - Market utilization (WAD-scaled). Values above `WAD` are
///   extrapolated along the upper branch of the curve.
/// * `rate_at_target` - Persisted rate at target, or `None` if the market has
///   never been touched. A value outside the configured bounds is clamped
///   into them first.
/// * `elapsed` - Seconds since the market's last update
///
/// # First Interaction
///
/// Without a persisted rate the baseline is the configured initial rate.
/// There is no prior interval to integrate over, so the average rate is the
/// curve at the initial rate and the value to persist is the initial rate.
///
/// # Example
///
/// ```rust
/// use adaptive_irm::curve::{borrow_rate, INITIAL_RATE_AT_TARGET};
/// use adaptive_irm::{CurveConfig, WAD};
///
/// let config = CurveConfig::default();
///
/// // Full utilization on first touch: 4x the initial rate
/// let result = borrow_rate(&config, WAD, None, 0);
/// assert_eq!(result.avg_borrow_rate, INITIAL_RATE_AT_TARGET * alloy_primitives::U256::from(4));
///
/// // After a day at full utilization the rate at target has grown
/// let adapted = borrow_rate(&config, WAD, Some(INITIAL_RATE_AT_TARGET), 86_400);
/// assert!(adapted.end_rate_at_target > INITIAL_RATE_AT_TARGET);
/// ```
pub fn borrow_rate(
    config: &CurveConfig,
    utilization: U256,
    rate_at_target: Option<U256>,
    elapsed: u64,
) -> BorrowRateResult {
    let err = utilization_error(config, utilization);

    let Some(stored_rate_at_target) = rate_at_target else {
        let rate = apply_curve(config, config.initial_rate_at_target, err);
        return BorrowRateResult {
            avg_borrow_rate: rate,
            end_borrow_rate: rate,
            end_rate_at_target: config.initial_rate_at_target,
        };
    };

    let start_rate_at_target = clamp(
        stored_rate_at_target,
        config.min_rate_at_target,
        config.max_rate_at_target,
    );
    let start_borrow_rate = apply_curve(config, start_rate_at_target, err);

    if linear_adaptation(config, err, elapsed).is_zero() {
        return BorrowRateResult {
            avg_borrow_rate: start_borrow_rate,
            end_borrow_rate: start_borrow_rate,
            end_rate_at_target: start_rate_at_target,
        };
    }

    let end_rate_at_target = new_rate_at_target(config, start_rate_at_target, err, elapsed);
    let end_borrow_rate = apply_curve(config, end_rate_at_target, err);

    BorrowRateResult {
        avg_borrow_rate: start_borrow_rate.saturating_add(end_borrow_rate) / U256::from(2),
        end_borrow_rate,
        end_rate_at_target,
    }
}
