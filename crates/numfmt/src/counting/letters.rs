//! Spreadsheet-style letter labels.
//!
//! The numbering used for lettered lists and spreadsheet columns
//! (a, b, c ... z, aa, ab ...). This is bijective base 26: digits run
//! 1-26 with no zero digit, so it is not the same as positional base 26.
//! Zero is undefined.

use crate::error::{NumFmtError, Result};

const SYSTEM: &str = "letter";

/// Convert a positive integer to a lowercase letter label.
///
/// Repeatedly takes `(n - 1) mod 26` as the next letter and continues
/// with `(n - 1) div 26`, most significant letter first.
///
/// # Errors
///
/// Returns [`NumFmtError::Unrepresentable`] if `n < 1`.
///
/// # Examples
///
/// ```
/// use numfmt::counting::lower_letters;
///
/// assert_eq!(lower_letters(1).unwrap(), "a");
/// assert_eq!(lower_letters(26).unwrap(), "z");
/// assert_eq!(lower_letters(27).unwrap(), "aa");
/// ```
pub fn lower_letters(n: i64) -> Result<String> {
    if n < 1 {
        return Err(NumFmtError::unrepresentable(SYSTEM, n));
    }
    let mut n = n;
    let mut letters = Vec::new();
    while n > 0 {
        let remainder = ((n - 1) % 26) as u8;
        letters.push(b'a' + remainder);
        n = (n - 1) / 26;
    }
    Ok(letters.iter().rev().map(|&b| char::from(b)).collect())
}

/// Convert a positive integer to an uppercase letter label.
///
/// # Errors
///
/// Returns [`NumFmtError::Unrepresentable`] if `n < 1`.
pub fn upper_letters(n: i64) -> Result<String> {
    Ok(lower_letters(n)?.to_ascii_uppercase())
}

/// Convert a letter label back to the integer it represents.
///
/// Case-insensitive. Each letter is a digit 1-26, most significant
/// first, so the value is the Horner sum `value * 26 + digit`.
///
/// # Errors
///
/// Returns [`NumFmtError::EmptyNumeral`] for an empty string,
/// [`NumFmtError::InvalidDigit`] for characters outside `a-z`/`A-Z`,
/// and [`NumFmtError::Overflow`] if the label exceeds the `i64` range.
///
/// # Examples
///
/// ```
/// use numfmt::counting::parse_letters;
///
/// assert_eq!(parse_letters("a").unwrap(), 1);
/// assert_eq!(parse_letters("AA").unwrap(), 27);
/// ```
pub fn parse_letters(letters: &str) -> Result<i64> {
    if letters.is_empty() {
        return Err(NumFmtError::empty_numeral(SYSTEM));
    }
    let mut value: i64 = 0;
    for ch in letters.chars() {
        let lower = ch.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return Err(NumFmtError::invalid_digit(SYSTEM, ch, letters));
        }
        let digit = i64::from(lower as u8 - b'a') + 1;
        value = value
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| NumFmtError::overflow(SYSTEM, letters))?;
    }
    Ok(value)
}
