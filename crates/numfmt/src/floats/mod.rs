//! Float handling: compact formatting, extraction from text, and
//! in-place rewriting.
//!
//! The pieces compose: [`extract`] splits text into a template and its
//! numeric spans, [`format`] reduces a value to a short fixed-notation
//! string, and [`map`] runs the two back to back to rewrite every
//! number in a string.

pub mod extract;
pub mod format;
pub mod map;

// Re-export commonly used items
pub use extract::{extract_float_strs, extract_floats, fill_template};
pub use format::{DEFAULT_NDIGITS, ToFloat, format_float, format_number, format_numbers};
pub use map::{format_numbers_in_string, map_floats};
