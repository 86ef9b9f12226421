//! Limited-precision float formatting without extra characters.
//!
//! Serialized text formats (SVG and friends) neither need nor support
//! full binary float precision, distinguish -0 from 0, or accept
//! scientific notation. These helpers reduce a value to the shortest
//! fixed-notation string at a bounded precision.

use crate::error::{NumFmtError, Result};

/// Default number of digits kept after the decimal point.
pub const DEFAULT_NDIGITS: i32 = 6;

/// Largest magnitude printed literally: 2^31 - 1. Anything beyond
/// (infinities included) clamps to this bound.
const MAX_SIGNED_INT: f64 = i32::MAX as f64;

/// Anything the formatter can coerce to an `f64`.
///
/// Implemented for the native numeric types (infallible) and for
/// strings, which parse with the full float grammar including
/// exponents and the textual `inf`/`nan` forms.
pub trait ToFloat {
    /// Coerce the value to an `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`NumFmtError::InvalidNumber`] if the value does not
    /// parse as a number.
    fn to_float(self) -> Result<f64>;
}

impl ToFloat for f64 {
    fn to_float(self) -> Result<f64> {
        Ok(self)
    }
}

impl ToFloat for f32 {
    fn to_float(self) -> Result<f64> {
        Ok(f64::from(self))
    }
}

impl ToFloat for i32 {
    fn to_float(self) -> Result<f64> {
        Ok(f64::from(self))
    }
}

impl ToFloat for u32 {
    fn to_float(self) -> Result<f64> {
        Ok(f64::from(self))
    }
}

impl ToFloat for i64 {
    fn to_float(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl ToFloat for u64 {
    fn to_float(self) -> Result<f64> {
        Ok(self as f64)
    }
}

impl ToFloat for &str {
    fn to_float(self) -> Result<f64> {
        self.trim()
            .parse()
            .map_err(|_| NumFmtError::invalid_number(self))
    }
}

impl ToFloat for String {
    fn to_float(self) -> Result<f64> {
        self.as_str().to_float()
    }
}

/// Format an `f64` at limited precision, removing extra characters.
///
/// * reduces precision to `ndigits` digits after the decimal point
///   (`None` means [`DEFAULT_NDIGITS`]; negative means no digit limit,
///   plain decimal notation)
/// * strips trailing zeros and a trailing decimal point, so whole
///   numbers print without one
/// * collapses "-0" to "0"
/// * clamps magnitudes beyond 2^31 - 1 to the signed 32-bit bound
/// * NaN prints as "nan"
///
/// # Examples
///
/// ```
/// use numfmt::floats::format_float;
///
/// assert_eq!(format_float(1.0000000001, None), "1");
/// assert_eq!(format_float(3.14159, Some(3)), "3.142");
/// assert_eq!(format_float(f64::INFINITY, None), "2147483647");
/// ```
pub fn format_float(value: f64, ndigits: Option<i32>) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value > MAX_SIGNED_INT {
        return i32::MAX.to_string();
    }
    if value < -MAX_SIGNED_INT {
        return (-i32::MAX).to_string();
    }

    let ndigits = ndigits.unwrap_or(DEFAULT_NDIGITS);
    let formatted = if ndigits >= 0 {
        let prec = ndigits as usize;
        format!("{value:.prec$}")
    } else {
        format!("{value}")
    };

    // Only the fractional part is fair game for trimming; an integral
    // rendering like "100" must keep its zeros.
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}

/// Format a numeric value or numeric string at limited precision.
///
/// The coercible counterpart of [`format_float`]: accepts anything
/// implementing [`ToFloat`] and applies the same reduction rules.
/// This is for isolated values; numbers embedded in larger text go
/// through [`format_numbers_in_string`](crate::floats::format_numbers_in_string).
///
/// # Errors
///
/// Returns [`NumFmtError::InvalidNumber`] if a string input does not
/// parse as a number.
///
/// # Examples
///
/// ```
/// use numfmt::floats::format_number;
///
/// assert_eq!(format_number("3.14159e-10", None).unwrap(), "0");
/// assert_eq!(format_number("3.9", Some(0)).unwrap(), "4");
/// assert_eq!(format_number(42, None).unwrap(), "42");
/// ```
pub fn format_number(value: impl ToFloat, ndigits: Option<i32>) -> Result<String> {
    Ok(format_float(value.to_float()?, ndigits))
}

/// Format an iterator of values member-wise at a shared precision.
///
/// Lazy: each value is coerced and formatted as the returned iterator
/// is consumed.
pub fn format_numbers<I>(values: I, ndigits: Option<i32>) -> impl Iterator<Item = Result<String>>
where
    I: IntoIterator,
    I::Item: ToFloat,
{
    values
        .into_iter()
        .map(move |value| format_number(value, ndigits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_zero_collapses() {
        assert_eq!(format_float(-0.0000000001, None), "0");
        assert_eq!(format_float(-0.0, None), "0");
        assert_eq!(format_float(-0.0, Some(-1)), "0");
    }

    #[test]
    fn test_whole_numbers_lose_the_point() {
        assert_eq!(format_float(1.0000000001, None), "1");
        assert_eq!(format_float(10.0, None), "10");
        assert_eq!(format_float(10.5, None), "10.5");
    }

    #[test]
    fn test_exponential_notation_input() {
        assert_eq!(format_number("3.14159e-10", None).unwrap(), "0");
        assert_eq!(format_number("3.14159E-10", None).unwrap(), "0");
    }

    #[test]
    fn test_explicit_precision() {
        assert_eq!(format_number("3.14159", Some(3)).unwrap(), "3.142");
        assert_eq!(format_number("3.9", Some(0)).unwrap(), "4");
    }

    #[test]
    fn test_zero_precision_keeps_integral_zeros() {
        assert_eq!(format_float(100.0, Some(0)), "100");
        assert_eq!(format_float(1000.0, Some(0)), "1000");
    }

    #[test]
    fn test_negative_precision_is_unbounded() {
        assert_eq!(format_float(3.14159, Some(-1)), "3.14159");
        // Ten fractional digits survive where the default would round
        assert_eq!(format_float(0.0000000001, Some(-1)), "0.0000000001");
    }

    #[test]
    fn test_infinity_clamps() {
        assert_eq!(format_number("inf", None).unwrap(), "2147483647");
        assert_eq!(format_number("-inf", None).unwrap(), "-2147483647");
        assert_eq!(format_float(f64::NEG_INFINITY, None), "-2147483647");
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(format_float(2147483648.0, None), "2147483647");
        assert_eq!(format_float(-2147483648.0, None), "-2147483647");
        // The bound itself is representable, not clamped
        assert_eq!(format_float(2147483647.0, None), "2147483647");
    }

    #[test]
    fn test_nan_prints_lowercase() {
        assert_eq!(format_float(f64::NAN, None), "nan");
        assert_eq!(format_number("nan", None).unwrap(), "nan");
    }

    #[test]
    fn test_string_inputs_are_trimmed() {
        assert_eq!(format_number("  3.14  ", None).unwrap(), "3.14");
    }

    #[test]
    fn test_unparseable_input() {
        assert!(format_number("bucket", None).is_err());
        assert!(format_number("", None).is_err());
    }

    #[test]
    fn test_integer_inputs() {
        assert_eq!(format_number(42, None).unwrap(), "42");
        assert_eq!(format_number(7u64, None).unwrap(), "7");
        assert_eq!(format_number(i64::MAX, None).unwrap(), "2147483647");
    }

    #[test]
    fn test_format_numbers_is_member_wise() {
        let formatted: Vec<_> = format_numbers([1.0, 2.0, 3.0], None)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(formatted, ["1", "2", "3"]);

        let empty: Vec<f64> = vec![];
        assert_eq!(format_numbers(empty, None).count(), 0);
    }
}
