//! Numeric utilities: range clamping, powers and decimal rounding
//!
//! # Rounding semantics
//!
//! [`round_to_precision`] computes `trunc_i32(number * 10^p + 0.5) / 10^p`:
//! - Half values round toward +infinity, so non-negative numbers round
//!   half-up while negative numbers do not round away from zero
//!   (`-1.25 → -1.2`, `-1.26 → -1.2`).
//! - The truncation is an `i32` cast. Scaled magnitudes outside the `i32`
//!   range saturate at `i32::MIN`/`i32::MAX` and NaN becomes 0. Use
//!   [`checked_round_to_precision`] to detect those inputs.

use std::ops::Mul;

use num_traits::{One, PrimInt};
use tracing::debug;

use crate::error::{BitByteError, Result};

/// Largest decimal precision accepted by configuration
pub const MAX_DECIMAL_PRECISION: u32 = 9;

/// 10^0 through 10^19, every power of ten representable in `u64`
pub const POWERS_OF_TEN: [u64; 20] = {
    let mut table = [1u64; 20];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// Restrict `value` to `[min, max]`
///
/// Returns `min` if `value < min`, else `max` if `value > max`, else `value`.
/// Unlike `Ord::clamp` this never panics: with `min > max` the two
/// comparisons are still applied in that order.
#[inline]
pub fn clamp_range<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Raise `base` to a non-negative integer power
///
/// Works for integers and floats; `exponent == 0` yields 1. Integer overflow
/// follows the type's arithmetic (panics in debug builds), see
/// [`checked_power`].
#[inline]
pub fn power<T>(base: T, exponent: usize) -> T
where
    T: Clone + One + Mul<T, Output = T>,
{
    num_traits::pow(base, exponent)
}

/// Raise an integer `base` to a power, reporting overflow
pub fn checked_power<T: PrimInt>(base: T, exponent: usize) -> Result<T> {
    num_traits::checked_pow(base, exponent).ok_or_else(|| {
        debug!(exponent, "Integer power overflow");
        BitByteError::overflow(format!("power with exponent {} overflows", exponent))
    })
}

/// 10 raised to `degree`
///
/// Degrees 0..=19 come from [`POWERS_OF_TEN`]; larger degrees overflow `u64`.
pub fn power_of_ten(degree: u32) -> Result<u64> {
    POWERS_OF_TEN
        .get(degree as usize)
        .copied()
        .ok_or_else(|| {
            debug!(degree, "Power of ten overflow");
            BitByteError::overflow(format!("10^{} exceeds u64", degree))
        })
}

/// 10^precision as a float, exact for every table entry
#[inline]
fn decimal_scale(precision: u32) -> f64 {
    match POWERS_OF_TEN.get(precision as usize) {
        Some(&p) => p as f64,
        None => 10f64.powi(precision.min(i32::MAX as u32) as i32),
    }
}

/// Round `number` to `precision` decimal digits
///
/// See the module docs for the exact (asymmetric, `i32`-truncating) rule.
///
/// # Example
/// ```
/// use voltage_bitbyte::numeric::round_to_precision;
/// assert_eq!(round_to_precision(123.456789, 2), 123.46);
/// ```
#[inline]
pub fn round_to_precision(number: f64, precision: u32) -> f64 {
    let scale = decimal_scale(precision);
    f64::from((number * scale + 0.5) as i32) / scale
}

/// Round `number` to `precision` decimal digits, rejecting scaled values
/// that do not fit the `i32` truncation range
pub fn checked_round_to_precision(number: f64, precision: u32) -> Result<f64> {
    let scale = decimal_scale(precision);
    let scaled = number * scale + 0.5;
    // Truncation keeps values in (i32::MIN - 1, i32::MAX + 1)
    if scaled.is_nan()
        || scaled <= f64::from(i32::MIN) - 1.0
        || scaled >= f64::from(i32::MAX) + 1.0
    {
        debug!(value = number, precision, "Scaled value out of i32 range");
        return Err(BitByteError::ScaledOutOfRange {
            value: number,
            precision,
        });
    }
    Ok(f64::from(scaled as i32) / scale)
}
