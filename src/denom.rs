// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denomination tag transforms for liquid-staked ("qAsset") tokens.
//!
//! A qAsset denomination is an ordinary denom string carrying a
//! leading-character convention (`Q...` or `AQ...` on chain, lowercase
//! `q` in display form) rather than structured metadata. The transforms
//! here are pure string rewrites, reversible only by convention.

/// Exponent-to-SI-letter table for base denominations.
///
/// A fixed ordered sequence rather than chained conditionals so the
/// boundary behavior is auditable: any exponent not listed here maps to
/// the empty prefix.
const SI_PREFIXES: [(u32, &str); 8] = [
    (3, "m"),
    (6, "u"),
    (9, "n"),
    (12, "p"),
    (15, "f"),
    (18, "a"),
    (21, "z"),
    (24, "y"),
];

/// SI-style magnitude letter for a base-denomination exponent.
///
/// Returns `""` for unmapped exponents (including 0); never an error.
///
/// # Examples
///
/// ```
/// use qdenom::si_prefix;
///
/// assert_eq!(si_prefix(6), "u");
/// assert_eq!(si_prefix(18), "a");
/// assert_eq!(si_prefix(7), "");
/// ```
pub fn si_prefix(exponent: u32) -> &'static str {
    SI_PREFIXES
        .iter()
        .find(|(exp, _)| *exp == exponent)
        .map(|(_, letter)| *letter)
        .unwrap_or("")
}

/// Normalize an on-chain liquid-staked denom to its lowercase display form.
///
/// `"Q..."` and `"AQ..."` prefixes both become a single lowercase `"q"`;
/// anything else passes through unchanged.
///
/// # Examples
///
/// ```
/// use qdenom::format_qasset;
///
/// assert_eq!(format_qasset("Qatom"), "qatom");
/// assert_eq!(format_qasset("AQatom"), "qatom");
/// assert_eq!(format_qasset("atom"), "atom");
/// ```
pub fn format_qasset(denom: &str) -> String {
    if let Some(rest) = denom.strip_prefix("AQ") {
        format!("q{rest}")
    } else if let Some(rest) = denom.strip_prefix('Q') {
        format!("q{rest}")
    } else {
        denom.to_string()
    }
}

/// Build the qAsset base denom for a native denom and exponent.
///
/// Prepends the SI letter for `exponent` (empty for unmapped or absent
/// exponents) followed by `"q"`. A `None` denom yields `""`.
///
/// # Examples
///
/// ```
/// use qdenom::q_denom_for_denom;
///
/// assert_eq!(q_denom_for_denom(Some("atom"), Some(6)), "uqatom");
/// assert_eq!(q_denom_for_denom(Some("atom"), None), "qatom");
/// assert_eq!(q_denom_for_denom(None, Some(6)), "");
/// ```
pub fn q_denom_for_denom(denom: Option<&str>, exponent: Option<u32>) -> String {
    let Some(denom) = denom else {
        return String::new();
    };
    let prefix = exponent.map(si_prefix).unwrap_or("");
    format!("{prefix}q{denom}")
}

/// Strip the `q` marker from a qAsset base denom: `"uqatom"` -> `"uatom"`.
///
/// This drops the character at index 1 unconditionally. It is the literal
/// behavior the front-end relies on and is NOT a general inverse of
/// [`q_denom_for_denom`]: a denom without an SI letter loses a payload
/// character instead (`"qatom"` -> `"qtom"`), so only call this on denoms
/// that carry a one-letter SI prefix. Kept as-is pending product
/// clarification.
///
/// Inputs shorter than two characters are returned unchanged.
pub fn denom_for_q_denom(denom: &str) -> String {
    let mut chars = denom.chars();
    let Some(first) = chars.next() else {
        return denom.to_string();
    };
    if chars.next().is_none() {
        return denom.to_string();
    }
    let mut out = String::with_capacity(denom.len() - 1);
    out.push(first);
    out.extend(chars);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== si_prefix tests ==========

    #[test]
    fn si_prefix_covers_full_table() {
        let expected = [
            (3, "m"),
            (6, "u"),
            (9, "n"),
            (12, "p"),
            (15, "f"),
            (18, "a"),
            (21, "z"),
            (24, "y"),
        ];
        for (exponent, letter) in expected {
            assert_eq!(si_prefix(exponent), letter);
        }
    }

    #[test]
    fn si_prefix_unmapped_is_empty() {
        assert_eq!(si_prefix(0), "");
        assert_eq!(si_prefix(7), "");
        assert_eq!(si_prefix(27), "");
    }

    // ========== format_qasset tests ==========

    #[test]
    fn format_qasset_with_q_prefix() {
        assert_eq!(format_qasset("Qatom"), "qatom");
    }

    #[test]
    fn format_qasset_with_aq_prefix() {
        assert_eq!(format_qasset("AQatom"), "qatom");
    }

    #[test]
    fn format_qasset_passes_through_native_denom() {
        assert_eq!(format_qasset("atom"), "atom");
        assert_eq!(format_qasset("uosmo"), "uosmo");
    }

    #[test]
    fn format_qasset_lowercase_q_untouched() {
        assert_eq!(format_qasset("qatom"), "qatom");
    }

    #[test]
    fn format_qasset_empty_string() {
        assert_eq!(format_qasset(""), "");
    }

    // ========== q_denom_for_denom tests ==========

    #[test]
    fn q_denom_for_denom_with_micro_exponent() {
        assert_eq!(q_denom_for_denom(Some("atom"), Some(6)), "uqatom");
    }

    #[test]
    fn q_denom_for_denom_with_atto_exponent() {
        assert_eq!(q_denom_for_denom(Some("dydx"), Some(18)), "aqdydx");
    }

    #[test]
    fn q_denom_for_denom_without_exponent() {
        assert_eq!(q_denom_for_denom(Some("atom"), None), "qatom");
    }

    #[test]
    fn q_denom_for_denom_with_unmapped_exponent() {
        assert_eq!(q_denom_for_denom(Some("atom"), Some(7)), "qatom");
    }

    #[test]
    fn q_denom_for_denom_without_denom() {
        assert_eq!(q_denom_for_denom(None, Some(6)), "");
    }

    // ========== denom_for_q_denom tests ==========

    #[test]
    fn denom_for_q_denom_strips_marker() {
        assert_eq!(denom_for_q_denom("uqatom"), "uatom");
        assert_eq!(denom_for_q_denom("aqdydx"), "adydx");
    }

    #[test]
    fn denom_for_q_denom_is_fixed_offset_not_inverse() {
        // no SI prefix present: the transform still drops index 1
        assert_eq!(denom_for_q_denom("qatom"), "qtom");
    }

    #[test]
    fn denom_for_q_denom_short_inputs_unchanged() {
        assert_eq!(denom_for_q_denom(""), "");
        assert_eq!(denom_for_q_denom("q"), "q");
    }
}
