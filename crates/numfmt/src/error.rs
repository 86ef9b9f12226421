//! Error types for number/string conversion.

use thiserror::Error;

/// Errors that can occur when converting between numbers and strings.
#[derive(Debug, Error)]
pub enum NumFmtError {
    /// Integer too small for a numbering system that starts at 1.
    #[error("{system} numbering is undefined for values below 1 (got {value})")]
    Unrepresentable { system: &'static str, value: i64 },

    /// Empty numeral string.
    #[error("cannot parse an empty string as a {system} numeral")]
    EmptyNumeral { system: &'static str },

    /// Character outside the numeral alphabet.
    #[error("invalid {system} digit '{digit}' in '{input}'")]
    InvalidDigit {
        system: &'static str,
        digit: char,
        input: String,
    },

    /// Numeral value exceeds the representable integer range.
    #[error("{system} numeral '{input}' overflows the integer range")]
    Overflow { system: &'static str, input: String },

    /// Input cannot be coerced to a floating-point number.
    #[error("cannot parse '{input}' as a number")]
    InvalidNumber { input: String },
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, NumFmtError>;

impl NumFmtError {
    /// Create an Unrepresentable error.
    pub fn unrepresentable(system: &'static str, value: i64) -> Self {
        Self::Unrepresentable { system, value }
    }

    /// Create an EmptyNumeral error.
    pub fn empty_numeral(system: &'static str) -> Self {
        Self::EmptyNumeral { system }
    }

    /// Create an InvalidDigit error.
    pub fn invalid_digit(system: &'static str, digit: char, input: impl Into<String>) -> Self {
        Self::InvalidDigit {
            system,
            digit,
            input: input.into(),
        }
    }

    /// Create an Overflow error.
    pub fn overflow(system: &'static str, input: impl Into<String>) -> Self {
        Self::Overflow {
            system,
            input: input.into(),
        }
    }

    /// Create an InvalidNumber error.
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }
}
