//! Precision-aware numeric helpers.
//!
//! [`divide_precise`] works in exact decimal arithmetic end to end, so
//! currency-like amounts come out free of binary floating-point drift.
//! [`percentage`] deliberately stays in `f64` (its rounding is cosmetic,
//! for display) and the two rounding paths must not be unified.
//!
//! Both round halves to the even neighbor (banker's rounding).

use crate::error::{NeatlyError, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest fractional-digit count a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Divide two numbers in exact decimal arithmetic, rounded half-to-even to
/// `decimal_places` fractional digits.
///
/// The result keeps exactly `decimal_places` digits after the point, so
/// `10 / 2` at two places displays as `5.00`. A `decimal_places` of zero
/// produces an integer-valued decimal.
///
/// # Errors
///
/// - [`NeatlyError::DivisionByZero`] when `denominator` is zero.
/// - [`NeatlyError::InvalidDecimal`] when an input is NaN, infinite, or
///   outside the decimal range.
/// - [`NeatlyError::Overflow`] when the quotient itself does not fit.
///
/// # Examples
///
/// ```
/// use neatly::numeric::divide_precise;
///
/// assert_eq!(divide_precise(10.0, 3.0, 4).unwrap().to_string(), "3.3333");
/// assert!(divide_precise(1.0, 0.0, 2).is_err());
/// ```
pub fn divide_precise(numerator: f64, denominator: f64, decimal_places: u32) -> Result<Decimal> {
    if denominator == 0.0 {
        return Err(NeatlyError::DivisionByZero);
    }

    let numerator = to_decimal(numerator)?;
    let denominator = to_decimal(denominator)?;
    let places = decimal_places.min(MAX_SCALE);

    let mut quotient = numerator
        .checked_div(denominator)
        .ok_or(NeatlyError::Overflow)?
        .round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    // Pin the scale so trailing zeros survive ("5.00", not "5")
    quotient.rescale(places);
    Ok(quotient)
}

/// Compute `value` as a percentage of `total`, rounded half-to-even to
/// `decimal_places` decimal places.
///
/// Zero values yield exactly `0.0`; negative inputs keep their sign.
///
/// # Errors
///
/// [`NeatlyError::ZeroTotal`] when `total` is zero.
///
/// # Examples
///
/// ```
/// use neatly::numeric::percentage;
///
/// assert_eq!(percentage(1.0, 3.0, 2).unwrap(), 33.33);
/// assert!(percentage(50.0, 0.0, 2).is_err());
/// ```
pub fn percentage(value: f64, total: f64, decimal_places: u32) -> Result<f64> {
    if total == 0.0 {
        return Err(NeatlyError::ZeroTotal);
    }
    let result = (value / total) * 100.0;
    Ok(round_half_even(result, decimal_places))
}

fn to_decimal(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value).ok_or(NeatlyError::InvalidDecimal(value))
}

/// Scale, round ties to even, unscale. Non-finite values and scales too
/// large for `f64` pass through unchanged.
fn round_half_even(value: f64, decimal_places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimal_places.min(308) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}
