// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Human-readable magnitude abbreviation for dashboard figures.
//!
//! Operates on native `f64` because it only ever runs on already-rounded
//! display values (TVL tiles, validator voting power); exact amounts
//! should go through [`crate::shift_digits`] first.

/// Magnitude suffixes, one per power of 1000.
const MAGNITUDE_SUFFIXES: [&str; 5] = ["", "k", "M", "B", "T"];

/// Abbreviate a number with `k`/`M`/`B`/`T` magnitude suffixes.
///
/// Values below 1000 (including zero and negatives) are printed plainly
/// with at most one fractional digit. Larger values are divided by the
/// matching power of 1000 and rounded to one fractional digit; a trailing
/// `.0` is stripped either way.
///
/// Values at or beyond 10^15 clamp to the `"T"` suffix rather than running
/// off the table. Non-finite input renders as `"0"`.
///
/// # Examples
///
/// ```
/// use qdenom::abbreviate_number;
///
/// assert_eq!(abbreviate_number(999.0), "999");
/// assert_eq!(abbreviate_number(1500.0), "1.5k");
/// assert_eq!(abbreviate_number(1234567.0), "1.2M");
/// ```
pub fn abbreviate_number(value: f64) -> String {
    if !value.is_finite() {
        tracing::warn!(value, "non-finite value in magnitude abbreviation");
        return "0".to_string();
    }
    if value < 1000.0 {
        return strip_trailing_zero(value);
    }

    let tier = (value.log10() / 3.0).floor() as usize;
    let tier = if tier >= MAGNITUDE_SUFFIXES.len() {
        tracing::debug!(value, "value beyond suffix table, clamping to T");
        MAGNITUDE_SUFFIXES.len() - 1
    } else {
        tier
    };

    let scaled = value / 1000f64.powi(tier as i32);
    format!("{}{}", strip_trailing_zero(scaled), MAGNITUDE_SUFFIXES[tier])
}

/// Format with one fractional digit, dropping a trailing `.0`.
fn strip_trailing_zero(value: f64) -> String {
    let fixed = format!("{value:.1}");
    fixed
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviate_below_one_thousand() {
        assert_eq!(abbreviate_number(42.0), "42");
        assert_eq!(abbreviate_number(42.5), "42.5");
        assert_eq!(abbreviate_number(999.0), "999");
    }

    #[test]
    fn abbreviate_zero_and_negative() {
        assert_eq!(abbreviate_number(0.0), "0");
        assert_eq!(abbreviate_number(-1500.0), "-1500");
    }

    #[test]
    fn abbreviate_thousands() {
        assert_eq!(abbreviate_number(1000.0), "1k");
        assert_eq!(abbreviate_number(1500.0), "1.5k");
    }

    #[test]
    fn abbreviate_millions() {
        assert_eq!(abbreviate_number(1234567.0), "1.2M");
    }

    #[test]
    fn abbreviate_billions_and_trillions() {
        assert_eq!(abbreviate_number(2_500_000_000.0), "2.5B");
        assert_eq!(abbreviate_number(7_100_000_000_000.0), "7.1T");
    }

    #[test]
    fn abbreviate_rounds_mantissa_to_one_digit() {
        assert_eq!(abbreviate_number(1990.0), "2k");
        assert_eq!(abbreviate_number(999_999.0), "1000k");
    }

    #[test]
    fn abbreviate_clamps_beyond_table() {
        // 10^15 would index past the suffix table; clamps to T instead
        assert_eq!(abbreviate_number(1e15), "1000T");
        assert_eq!(abbreviate_number(2.5e16), "25000T");
    }

    #[test]
    fn abbreviate_non_finite_is_zero() {
        assert_eq!(abbreviate_number(f64::NAN), "0");
        assert_eq!(abbreviate_number(f64::INFINITY), "0");
    }
}
