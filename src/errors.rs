// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the qdenom library.
//!
//! All decimal operations share a single error type, [`AmountError`].
//! Invalid numeric input is always propagated to the caller rather than
//! coerced to zero; the only place an absent value is treated as zero is
//! [`is_greater_than_zero`](crate::is_greater_than_zero), where `None`
//! explicitly means "no balance yet".
//!
//! # Examples
//!
//! ```
//! use qdenom::{shift_digits, AmountError};
//!
//! match shift_digits("not-a-number", -6) {
//!     Err(AmountError::InvalidNumber { input }) => {
//!         eprintln!("rejected input: {input}");
//!     }
//!     other => panic!("expected InvalidNumber, got {other:?}"),
//! }
//! ```

/// Errors that can occur during decimal amount operations.
#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    /// The input string could not be parsed as a decimal number.
    ///
    /// Callers are expected to pre-validate user-entered amounts; this
    /// variant exists so that malformed chain data is surfaced instead of
    /// silently displayed as zero.
    #[error("invalid numeric input: {input:?}")]
    InvalidNumber {
        /// The offending input, verbatim
        input: String,
    },
}

impl AmountError {
    /// Create an [`AmountError::InvalidNumber`] from the rejected input.
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_number_display_includes_input() {
        let err = AmountError::invalid_number("12..3");
        assert_eq!(err.to_string(), "invalid numeric input: \"12..3\"");
    }
}
