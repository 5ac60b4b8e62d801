//! Curve configuration.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::curve::{
    ADJUSTMENT_SPEED, CURVE_STEEPNESS, INITIAL_RATE_AT_TARGET, MAX_RATE_AT_TARGET,
    MIN_RATE_AT_TARGET, TARGET_UTILIZATION,
};
use crate::error::{IrmError, Result};
use crate::math::{w_div_down, w_mul_down, WAD};

/// Largest accepted curve steepness (1000 in WAD).
pub const MAX_CURVE_STEEPNESS: U256 = U256::from_limbs([0x35C9_ADC5_DEA0_0000, 0x36, 0, 0]);

/// Parameters of the adaptive curve. All values are WAD-scaled; rates are
/// per second.
///
/// Missing fields deserialize to the protocol defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Utilization at which the curve returns `rate_at_target`.
    pub target_utilization: U256,
    /// Rate multiplier at full utilization.
    pub curve_steepness: U256,
    /// Rate at target for markets without a persisted value.
    pub initial_rate_at_target: U256,
    /// Adaptation speed of `rate_at_target`, per second.
    pub adjustment_speed: U256,
    pub min_rate_at_target: U256,
    pub max_rate_at_target: U256,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            target_utilization: TARGET_UTILIZATION,
            curve_steepness: CURVE_STEEPNESS,
            initial_rate_at_target: INITIAL_RATE_AT_TARGET,
            adjustment_speed: ADJUSTMENT_SPEED,
            min_rate_at_target: MIN_RATE_AT_TARGET,
            max_rate_at_target: MAX_RATE_AT_TARGET,
        }
    }
}

impl CurveConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom target utilization.
    pub fn with_target_utilization(mut self, target: U256) -> Self {
        self.target_utilization = target;
        self
    }

    /// Set a custom curve steepness.
    pub fn with_curve_steepness(mut self, steepness: U256) -> Self {
        self.curve_steepness = steepness;
        self
    }

    /// Set a custom initial rate at target.
    pub fn with_initial_rate_at_target(mut self, rate: U256) -> Self {
        self.initial_rate_at_target = rate;
        self
    }

    /// Set a custom adjustment speed.
    pub fn with_adjustment_speed(mut self, speed: U256) -> Self {
        self.adjustment_speed = speed;
        self
    }

    /// Set custom bounds on the rate at target.
    pub fn with_rate_bounds(mut self, min: U256, max: U256) -> Self {
        self.min_rate_at_target = min;
        self.max_rate_at_target = max;
        self
    }

    /// Check the invariants the curve engine relies on.
    pub fn validate(&self) -> Result<()> {
        if self.target_utilization.is_zero() || self.target_utilization >= WAD {
            return Err(IrmError::InvalidConfig(format!(
                "target utilization {} must be in (0, 1e18)",
                self.target_utilization
            )));
        }
        if self.curve_steepness < WAD || self.curve_steepness > MAX_CURVE_STEEPNESS {
            return Err(IrmError::InvalidConfig(format!(
                "curve steepness {} must be in [1e18, {}]",
                self.curve_steepness, MAX_CURVE_STEEPNESS
            )));
        }
        if self.min_rate_at_target.is_zero() {
            return Err(IrmError::InvalidConfig(
                "minimum rate at target must be positive".to_string(),
            ));
        }
        if self.min_rate_at_target > self.max_rate_at_target {
            return Err(IrmError::InvalidConfig(format!(
                "rate bounds inverted: min {} > max {}",
                self.min_rate_at_target, self.max_rate_at_target
            )));
        }
        if self.initial_rate_at_target < self.min_rate_at_target
            || self.initial_rate_at_target > self.max_rate_at_target
        {
            return Err(IrmError::InvalidConfig(format!(
                "initial rate at target {} outside [{}, {}]",
                self.initial_rate_at_target, self.min_rate_at_target, self.max_rate_at_target
            )));
        }
        // Lowest point of the curve: min rate at target at zero utilization
        if w_mul_down(w_div_down(WAD, self.curve_steepness), self.min_rate_at_target).is_zero() {
            return Err(IrmError::InvalidConfig(format!(
                "minimum rate at target {} rounds to a zero borrow rate at steepness {}",
                self.min_rate_at_target, self.curve_steepness
            )));
        }
        Ok(())
    }
}
