//! Rewrite the float literals inside a string, leaving the rest alone.

use tracing::trace;

use crate::error::Result;
use crate::floats::extract::{extract_floats, fill_template};
use crate::floats::format::format_float;

/// Apply `func` to every float literal in `data` and splice the
/// results back into place.
///
/// Non-numeric text passes through untouched. Each matched span is
/// replaced by whatever string `func` returns for its parsed value.
///
/// # Errors
///
/// Returns [`NumFmtError::InvalidNumber`](crate::error::NumFmtError::InvalidNumber)
/// if a matched span does not parse as a number.
///
/// # Examples
///
/// ```
/// use numfmt::floats::map_floats;
///
/// let doubled = map_floats(|x| (x * 2.0).to_string(), "1 and 2")?;
/// assert_eq!(doubled, "2 and 4");
/// # Ok::<(), numfmt::NumFmtError>(())
/// ```
pub fn map_floats(mut func: impl FnMut(f64) -> String, data: &str) -> Result<String> {
    let (template, floats) = extract_floats(data);
    let mut formatted = Vec::new();
    for float in floats {
        formatted.push(func(float?));
    }
    trace!(count = formatted.len(), "Rewrote float literals");
    Ok(fill_template(&template, formatted))
}

/// Format every number in a string at limited precision.
///
/// Applies [`format_float`](crate::floats::format_float) to each float
/// literal: precision capped at `ndigits` (`None` for the default),
/// trailing zeros stripped, -0 collapsed, magnitudes clamped to the
/// signed 32-bit bound.
///
/// A full round trip keeps exponential notation out of the result, so
/// the output is safe for formats that only read plain decimals.
///
/// # Errors
///
/// Returns [`NumFmtError::InvalidNumber`](crate::error::NumFmtError::InvalidNumber)
/// if a matched span does not parse as a number.
///
/// # Examples
///
/// ```
/// use numfmt::floats::format_numbers_in_string;
///
/// let path = format_numbers_in_string("M 0.5000 1.25e1 l 3.00000001 0", None)?;
/// assert_eq!(path, "M 0.5 12.5 l 3 0");
/// # Ok::<(), numfmt::NumFmtError>(())
/// ```
pub fn format_numbers_in_string(data: &str, ndigits: Option<i32>) -> Result<String> {
    trace!(?ndigits, "Formatting numbers in string");
    map_floats(|float| format_float(float, ndigits), data)
}
