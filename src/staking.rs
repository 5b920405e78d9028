// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Staking display math derived from chain query results.
//!
//! These are the exact-decimal computations behind the staking dashboard
//! figures: APR, delegation totals, and the unbonding period. Inputs
//! arrive as the decimal strings found in staking and mint module query
//! responses; RPC transport and protobuf decoding are the caller's
//! concern.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::{Deserialize, Serialize};

use crate::amount::{parse_decimal, to_display_string};
use crate::errors::AmountError;
use crate::{is_greater_than_zero, shift_digits, sum};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Bonded/not-bonded token totals from the staking pool query.
///
/// Amounts are base-denomination decimal strings, exactly as returned by
/// the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingPool {
    /// Tokens currently bonded to validators
    pub bonded_tokens: String,
    /// Tokens in the pool but not bonded
    pub not_bonded_tokens: String,
}

/// Chain-level inputs for APR calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainMetadata {
    /// Annual token provisions from the mint module, base denomination
    pub annual_provisions: String,
    /// Community tax rate as a decimal fraction (e.g. `"0.02"`)
    pub community_tax: String,
    /// Staking pool totals
    pub pool: StakingPool,
}

/// Staking APR as a percentage string with two fractional digits.
///
/// Computes `inflation * (1 - community_tax) / bonded_ratio *
/// (1 - commission)`, shifted to a percentage and rounded **down** to two
/// decimal places. Rounding down rather than half-up keeps the advertised
/// rate conservative.
///
/// A chain with zero total supply or zero bonded tokens has no meaningful
/// APR; that case returns `"0"` rather than dividing by zero.
///
/// # Errors
///
/// Returns [`AmountError::InvalidNumber`] if any input is not a decimal
/// number.
///
/// # Examples
///
/// ```
/// use qdenom::{calc_staking_apr, ChainMetadata, StakingPool};
///
/// let metadata = ChainMetadata {
///     annual_provisions: "20000000".into(),
///     community_tax: "0.02".into(),
///     pool: StakingPool {
///         bonded_tokens: "60000000".into(),
///         not_bonded_tokens: "40000000".into(),
///     },
/// };
/// // 0.2 inflation * 0.98 / 0.6 bonded ratio * 0.95 commission share
/// assert_eq!(calc_staking_apr(&metadata, "0.05").unwrap(), "31.03");
/// ```
pub fn calc_staking_apr(metadata: &ChainMetadata, commission: &str) -> Result<String, AmountError> {
    let bonded = parse_decimal(&metadata.pool.bonded_tokens)?;
    let not_bonded = parse_decimal(&metadata.pool.not_bonded_tokens)?;
    let annual_provisions = parse_decimal(&metadata.annual_provisions)?;
    let community_tax = parse_decimal(&metadata.community_tax)?;
    let commission = parse_decimal(commission)?;

    let total_supply = &bonded + &not_bonded;
    if total_supply.is_zero() || bonded.is_zero() {
        tracing::warn!(
            bonded = %metadata.pool.bonded_tokens,
            not_bonded = %metadata.pool.not_bonded_tokens,
            "degenerate staking pool, reporting zero APR"
        );
        return Ok("0".to_string());
    }

    let bonded_ratio = &bonded / &total_supply;
    let inflation = &annual_provisions / &total_supply;
    let one = BigDecimal::from(1);

    let apr = inflation * (&one - community_tax) / bonded_ratio * (&one - commission)
        * BigDecimal::from(100);

    Ok(to_display_string(
        &apr.with_scale_round(2, RoundingMode::Down),
    ))
}

/// Exact total of parsed delegation amounts.
///
/// Thin wrapper over [`sum`]; an empty delegation list totals `"0"`.
pub fn calc_total_delegation<I, S>(amounts: I) -> Result<String, AmountError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sum(amounts)
}

/// Unbonding period in whole days, from the staking params' seconds value.
///
/// Rounded half-up to a whole number of days, as shown in the unstake
/// confirmation flow.
pub fn parse_unbonding_days(seconds: u64) -> String {
    let days = BigDecimal::from(seconds) / BigDecimal::from(SECONDS_PER_DAY);
    to_display_string(&days.with_scale_round(0, RoundingMode::HalfUp))
}

/// Display form of the mint module's raw annual provisions figure.
///
/// The chain reports provisions with 18 fractional digits of fixed-point
/// scaling; this shifts them down and yields `None` unless the result is
/// strictly positive (a chain that has not begun minting reports zero).
///
/// # Errors
///
/// Returns [`AmountError::InvalidNumber`] if `raw` is not a decimal
/// number.
pub fn annual_provisions_display(raw: &str) -> Result<Option<String>, AmountError> {
    let shifted = shift_digits(raw, -18)?;
    if is_greater_than_zero(Some(&shifted))? {
        Ok(Some(shifted))
    } else {
        Ok(None)
    }
}
