//! Roman numerals.
//!
//! Construction works by contraction: write the value as a run of unit
//! symbols, then collapse runs into larger symbols and subtractive pairs
//! with an ordered substitution table. Parsing uses the classic signed
//! scan, so it accepts non-canonical numerals without complaint.

use crate::error::{NumFmtError, Result};

const SYSTEM: &str = "roman";

/// Ordered contractions applied to a run of i's.
///
/// Order is load-bearing: the additive collapses must all run before
/// the subtractive ones, and each rule assumes the string the earlier
/// rules left behind.
const ROMAN_SUBS: &[(&str, &str)] = &[
    ("iiiii", "v"),
    ("vv", "x"),
    ("xxxxx", "l"),
    ("ll", "c"),
    ("ccccc", "d"),
    ("dd", "m"),
    ("iiii", "iv"),
    ("viv", "ix"), // 5 + 4 -> 9
    ("xxxx", "xl"),
    ("lxl", "xc"), // 50 + 40 -> 90
    ("cccc", "cd"),
    ("dcd", "cm"), // 500 + 400 -> 900
];

/// Convert a positive integer to a lowercase Roman numeral.
///
/// Produces standard subtractive notation for 1-3999. There is no
/// contraction above 'm', so larger values simply accumulate leading
/// 'm' symbols (10000 is ten of them); the conventional overbar
/// notation would need non-ASCII output. Memory use is proportional
/// to `n` while the contractions run.
///
/// # Errors
///
/// Returns [`NumFmtError::Unrepresentable`] if `n < 1`.
///
/// # Examples
///
/// ```
/// use numfmt::counting::lower_roman;
///
/// assert_eq!(lower_roman(9).unwrap(), "ix");
/// assert_eq!(lower_roman(44).unwrap(), "xliv");
/// assert_eq!(lower_roman(10000).unwrap(), "m".repeat(10));
/// ```
pub fn lower_roman(n: i64) -> Result<String> {
    if n < 1 {
        return Err(NumFmtError::unrepresentable(SYSTEM, n));
    }
    let mut numeral = "i".repeat(n as usize);
    for &(pattern, contraction) in ROMAN_SUBS {
        numeral = numeral.replace(pattern, contraction);
    }
    Ok(numeral)
}

/// Convert a positive integer to an uppercase Roman numeral.
///
/// # Errors
///
/// Returns [`NumFmtError::Unrepresentable`] if `n < 1`.
pub fn upper_roman(n: i64) -> Result<String> {
    Ok(lower_roman(n)?.to_ascii_uppercase())
}

/// Convert a Roman numeral back to the integer it represents.
///
/// Case-insensitive. Scans left to right: a symbol strictly smaller
/// than its right neighbor counts negative (the subtractive pair
/// rule), everything else counts positive. There is no structural
/// validation, so non-canonical input like "iiii" parses to whatever
/// the signed sum gives (4 in that case).
///
/// # Errors
///
/// Returns [`NumFmtError::EmptyNumeral`] for an empty string,
/// [`NumFmtError::InvalidDigit`] for characters outside `ivxlcdm`,
/// and [`NumFmtError::Overflow`] if the sum leaves the `i64` range.
///
/// # Examples
///
/// ```
/// use numfmt::counting::parse_roman;
///
/// assert_eq!(parse_roman("xliv").unwrap(), 44);
/// assert_eq!(parse_roman("MMXXIV").unwrap(), 2024);
/// ```
pub fn parse_roman(roman: &str) -> Result<i64> {
    if roman.is_empty() {
        return Err(NumFmtError::empty_numeral(SYSTEM));
    }
    let mut values = Vec::with_capacity(roman.len());
    for ch in roman.chars() {
        let value =
            roman_digit(ch).ok_or_else(|| NumFmtError::invalid_digit(SYSTEM, ch, roman))?;
        values.push(value);
    }

    let mut total: i64 = 0;
    for (idx, &value) in values.iter().enumerate() {
        let signed = match values.get(idx + 1) {
            Some(&next) if value < next => -value,
            _ => value,
        };
        total = total
            .checked_add(signed)
            .ok_or_else(|| NumFmtError::overflow(SYSTEM, roman))?;
    }
    Ok(total)
}

/// Additive value of a single Roman symbol, or None if it is not one.
fn roman_digit(ch: char) -> Option<i64> {
    match ch.to_ascii_lowercase() {
        'i' => Some(1),
        'v' => Some(5),
        'x' => Some(10),
        'l' => Some(50),
        'c' => Some(100),
        'd' => Some(500),
        'm' => Some(1000),
        _ => None,
    }
}
