//! Fixed-point math at WAD (1e18) scale.
//!
//! Every operation truncates toward zero. The rate engine depends on these
//! exact rounding rules: changing the order of a multiplication and a
//! division changes persisted rates bit-for-bit.

use alloy_primitives::{ruint::UintTryFrom, U256, U512};

/// 1e18, the fixed-point unit.
pub const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Seconds in a 365-day year, used to convert per-second rates.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Largest exponent magnitude fed to the Taylor series (64 in WAD).
///
/// Past this point `1 + x + x²/2 + x³/6` exceeds any MAX/MIN ratio and the
/// caller clamps anyway, so capping only prevents overflow.
pub const MAX_EXP_INPUT: U256 = U256::from_limbs([0x782D_ACE9_D900_0000, 3, 0, 0]);

/// `x * y / d`, rounded down.
///
/// The product is taken at full width. A quotient that does not fit in
/// 256 bits, or a zero divisor, saturates to `U256::MAX`.
pub fn mul_div_down(x: U256, y: U256, d: U256) -> U256 {
    if d.is_zero() {
        return U256::MAX;
    }
    let product: U512 = x.widening_mul(y);
    U256::uint_try_from(product / U512::from(d)).unwrap_or(U256::MAX)
}

/// `x * y / WAD`, rounded down.
pub fn w_mul_down(x: U256, y: U256) -> U256 {
    mul_div_down(x, y, WAD)
}

/// `x * WAD / y`, rounded down.
pub fn w_div_down(x: U256, y: U256) -> U256 {
    mul_div_down(x, WAD, y)
}

/// Compounded growth `e^(x * n) - 1`, approximated by the first three terms
/// of its Taylor expansion: `xn + (xn)²/2 + (xn)³/6`.
///
/// Each term is truncated before the next one is derived from it.
pub fn w_taylor_compounded(x: U256, n: U256) -> U256 {
    let first_term = x.saturating_mul(n);
    let second_term = mul_div_down(first_term, first_term, U256::from(2) * WAD);
    let third_term = mul_div_down(second_term, first_term, U256::from(3) * WAD);

    first_term.saturating_add(second_term).saturating_add(third_term)
}

/// `e^x` for `x = ±magnitude` (WAD-scaled), as `1 + compounded(x, 1)`.
///
/// For negative exponents the alternating series can drop below zero once
/// the magnitude passes ~1.596; the result then floors at zero.
pub fn w_exp(magnitude: U256, negative: bool) -> U256 {
    let x = min(magnitude, MAX_EXP_INPUT);

    if !negative {
        return WAD.saturating_add(w_taylor_compounded(x, U256::from(1)));
    }

    let second_term = mul_div_down(x, x, U256::from(2) * WAD);
    let third_term = mul_div_down(second_term, x, U256::from(3) * WAD);

    zero_floor_sub(WAD + second_term, x + third_term)
}

/// `max(x - y, 0)`
pub fn zero_floor_sub(x: U256, y: U256) -> U256 {
    x.saturating_sub(y)
}

pub fn min(a: U256, b: U256) -> U256 {
    if a < b {
        a
    } else {
        b
    }
}

pub fn max(a: U256, b: U256) -> U256 {
    if a > b {
        a
    } else {
        b
    }
}

/// Bounds `x` to `[low, high]`.
pub fn clamp(x: U256, low: U256, high: U256) -> U256 {
    min(max(x, low), high)
}

/// Convert a WAD-scaled value to f64 (lossy, for display only).
pub fn rate_to_f64(value: U256) -> f64 {
    value.saturating_to::<u128>() as f64 / 1e18
}

/// Simple annualized rate (APR) of a per-second WAD rate.
pub fn rate_to_apr(rate_per_second: U256) -> f64 {
    rate_to_f64(rate_per_second) * SECONDS_PER_YEAR as f64
}

/// Continuously compounded annual yield of a per-second WAD rate.
pub fn rate_to_apy(rate_per_second: U256) -> f64 {
    rate_to_apr(rate_per_second).exp() - 1.0
}
