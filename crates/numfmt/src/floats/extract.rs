//! Pull float literals out of arbitrary text.
//!
//! Splits a string into a reusable template and the numeric spans that
//! filled it, so the numbers can be rewritten without touching the
//! surrounding text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::floats::format::ToFloat;

/// Matches one float literal: optional sign, digits with an optional
/// decimal point, optional exponent. Digits are ASCII, so every match
/// is guaranteed to parse as an `f64`.
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?").expect("Invalid float regex")
});

/// Split text into a template and the float substrings that fill it.
///
/// The template replaces each float literal with a `{}` placeholder;
/// literal braces in the input are escaped by doubling. Filling the
/// template with the unmodified substrings reproduces the input
/// exactly.
///
/// The substring iterator is lazy and borrows from `data`.
///
/// # Examples
///
/// ```
/// use numfmt::floats::extract_float_strs;
///
/// let (template, floats) = extract_float_strs("x=1.5 y=-2");
/// assert_eq!(template, "x={} y={}");
/// assert_eq!(floats.collect::<Vec<_>>(), ["1.5", "-2"]);
/// ```
pub fn extract_float_strs(data: &str) -> (String, impl Iterator<Item = &str>) {
    let escaped = data.replace('{', "{{").replace('}', "}}");
    let template = FLOAT_RE.replace_all(&escaped, "{}").into_owned();
    let floats = FLOAT_RE.find_iter(data).map(|m| m.as_str());
    (template, floats)
}

/// Split text into a template and the parsed floats that fill it.
///
/// Identical to [`extract_float_strs`] except the substrings are
/// parsed, so the values can be transformed before refilling.
///
/// # Examples
///
/// ```
/// use numfmt::floats::extract_floats;
///
/// let (template, floats) = extract_floats("from 1e3 to 2e3");
/// let floats: Result<Vec<_>, _> = floats.collect();
/// assert_eq!(template, "from {} to {}");
/// assert_eq!(floats.unwrap(), [1000.0, 2000.0]);
/// ```
pub fn extract_floats(data: &str) -> (String, impl Iterator<Item = Result<f64>>) {
    let (template, floats) = extract_float_strs(data);
    (template, floats.map(ToFloat::to_float))
}

/// Fill `{}` placeholders in a template with values, in order.
///
/// Doubled braces unescape to literal braces. Placeholders beyond the
/// supplied values, and braces that pair with nothing, pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use numfmt::floats::fill_template;
///
/// assert_eq!(fill_template("x={} y={}", ["1", "2"]), "x=1 y=2");
/// assert_eq!(fill_template("{{{}}}", ["1"]), "{1}");
/// ```
pub fn fill_template<I>(template: &str, values: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut values = values.into_iter();
    let mut filled = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                filled.push('{');
            }
            '{' if chars.peek() == Some(&'}') => {
                chars.next();
                match values.next() {
                    Some(value) => filled.push_str(value.as_ref()),
                    None => filled.push_str("{}"),
                }
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                filled.push('}');
            }
            _ => filled.push(ch),
        }
    }
    filled
}
