// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact decimal scaling between base-denomination micro-units and
//! human-displayed values.
//!
//! On-chain amounts are integers in the chain's base denomination (e.g.
//! `uatom` = 10^-6 ATOM) and routinely exceed what `f64` can represent
//! exactly, so every operation here runs on [`bigdecimal::BigDecimal`].
//! Native floats appear in exactly one place, [`to_number`], which is the
//! documented precision-loss boundary of the crate.
//!
//! Rounding is **half-up** (away from zero on ties) everywhere, matching
//! the display conventions of the staking front-ends this crate serves.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};

use crate::errors::AmountError;

/// Default number of fractional digits kept by [`shift_digits`] and
/// [`to_number`].
pub const DEFAULT_DECIMAL_PLACES: i64 = 6;

/// Parse a decimal string, surfacing malformed input as
/// [`AmountError::InvalidNumber`].
///
/// Accepts plain decimal and exponent notation (`"1.5"`, `"-3"`, `"2e18"`).
pub(crate) fn parse_decimal(value: &str) -> Result<BigDecimal, AmountError> {
    BigDecimal::from_str(value.trim()).map_err(|_| AmountError::invalid_number(value))
}

/// 10^places as an exact decimal (positive or negative exponent).
fn pow10(places: i64) -> BigDecimal {
    // BigDecimal::new(digits, scale) represents digits * 10^(-scale)
    BigDecimal::new(BigInt::from(1), -places)
}

/// Render a decimal with trailing zeros stripped, always in plain
/// (non-exponential) notation.
pub(crate) fn to_display_string(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}

/// Scale a decimal string by a power of ten, rounding to
/// [`DEFAULT_DECIMAL_PLACES`] fractional digits.
///
/// Returns a decimal string equal to `value * 10^places`, rounded half-up
/// to 6 fractional digits with trailing zeros stripped. The arithmetic is
/// exact up to the final rounding step; amounts with 18 significant
/// fractional digits survive without binary floating-point error.
///
/// # Errors
///
/// Returns [`AmountError::InvalidNumber`] if `value` is not a decimal
/// number.
///
/// # Examples
///
/// ```
/// use qdenom::shift_digits;
///
/// // 12.5 ATOM worth of uatom, down to display units
/// assert_eq!(shift_digits("12500000", -6).unwrap(), "12.5");
///
/// // back up to micro-units
/// assert_eq!(shift_digits("12.5", 6).unwrap(), "12500000");
/// ```
pub fn shift_digits(value: &str, places: i64) -> Result<String, AmountError> {
    shift_digits_rounded(value, places, DEFAULT_DECIMAL_PLACES)
}

/// [`shift_digits`] with a caller-specified number of fractional digits.
///
/// `decimal_places` is the scale passed to the final half-up rounding step;
/// `0` rounds to a whole number.
///
/// # Examples
///
/// ```
/// use qdenom::shift_digits_rounded;
///
/// // voting power display drops the fraction entirely
/// assert_eq!(shift_digits_rounded("123456789", -6, 0).unwrap(), "123");
/// ```
pub fn shift_digits_rounded(
    value: &str,
    places: i64,
    decimal_places: i64,
) -> Result<String, AmountError> {
    let shifted = parse_decimal(value)? * pow10(places);
    let rounded = shifted.with_scale_round(decimal_places, RoundingMode::HalfUp);
    Ok(to_display_string(&rounded))
}

/// True iff the value parses to a number strictly greater than zero.
///
/// `None` means "no balance yet" and is treated as zero by design, not as
/// an error. Present but malformed input is still rejected.
///
/// # Examples
///
/// ```
/// use qdenom::is_greater_than_zero;
///
/// assert!(!is_greater_than_zero(None).unwrap());
/// assert!(!is_greater_than_zero(Some("0")).unwrap());
/// assert!(is_greater_than_zero(Some("0.0001")).unwrap());
/// ```
pub fn is_greater_than_zero(value: Option<&str>) -> Result<bool, AmountError> {
    match value {
        None => Ok(false),
        Some(v) => Ok(parse_decimal(v)? > BigDecimal::zero()),
    }
}

/// Round a decimal string and convert it to a native `f64`.
///
/// This is the crate's one precision-loss boundary: the result is for
/// display and chart plotting only and must never be fed back into exact
/// arithmetic. Use [`shift_digits`] and [`sum`] for anything that will be
/// computed on further.
///
/// # Errors
///
/// Returns [`AmountError::InvalidNumber`] if `value` is not a decimal
/// number.
pub fn to_number(value: &str, decimal_places: i64) -> Result<f64, AmountError> {
    let rounded = parse_decimal(value)?.with_scale_round(decimal_places, RoundingMode::HalfUp);
    Ok(rounded.to_f64().unwrap_or_else(|| {
        tracing::warn!(value = %rounded, "decimal out of f64 range, displaying as 0");
        0.0
    }))
}

/// Exact decimal sum of any number of decimal strings.
///
/// Accumulates with arbitrary-precision addition; there is no intermediate
/// float conversion and no rounding. An empty iterator sums to `"0"`.
///
/// # Errors
///
/// Returns [`AmountError::InvalidNumber`] on the first value that is not a
/// decimal number.
///
/// # Examples
///
/// ```
/// use qdenom::sum;
///
/// let total = sum(["0.1", "0.2"]).unwrap();
/// assert_eq!(total, "0.3"); // not 0.30000000000000004
/// ```
pub fn sum<I, S>(values: I) -> Result<String, AmountError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = BigDecimal::zero();
    for value in values {
        total += parse_decimal(value.as_ref())?;
    }
    Ok(to_display_string(&total))
}
