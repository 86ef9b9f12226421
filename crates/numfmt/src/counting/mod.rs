//! Numbering systems not natively supported by decimal formatting.
//!
//! This module provides bidirectional conversions for:
//! - **letters**: spreadsheet-style letter labels (a, b ... z, aa, ab ...)
//! - **roman**: Roman numerals in subtractive notation
//!
//! Both systems number from 1; neither has a representation for zero
//! or negative values.

pub mod letters;
pub mod roman;

// Re-export commonly used items
pub use letters::{lower_letters, parse_letters, upper_letters};
pub use roman::{lower_roman, parse_roman, upper_roman};
