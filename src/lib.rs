// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact denomination and magnitude math for interchain staking
//! front-ends: decimal scaling between base-denomination micro-units and
//! display values, liquid-staked ("qAsset") denom tag transforms,
//! human-readable magnitude abbreviation, and the staking dashboard
//! figures derived from them.
//!
//! All amount arithmetic is arbitrary-precision decimal; `f64` appears
//! only at the documented display boundaries ([`to_number`],
//! [`abbreviate_number`]).

mod abbrev;
mod amount;
mod denom;
mod errors;
mod staking;

pub use abbrev::*;
pub use amount::*;
pub use denom::*;
pub use errors::*;
pub use staking::*;
