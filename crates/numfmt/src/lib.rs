//! Compact number formatting and alternate numbering systems for
//! generated text.
//!
//! This crate converts between integers and the numbering systems used
//! to label generated content (letters, Roman numerals), and reduces
//! floats to the shortest fixed-notation strings that text formats
//! like SVG accept.
//!
//! # Features
//!
//! - Bijective base-26 letter labels (`a`, `b`, .. `z`, `aa`) in both
//!   cases, with a parser back to integers
//! - Lowercase and uppercase Roman numerals, including values past
//!   3999, with a permissive sign-scanning parser
//! - Precision-limited float formatting that strips trailing zeros,
//!   collapses `-0`, clamps to the signed 32-bit range, and never
//!   emits scientific notation
//! - Template extraction and refilling to rewrite every number inside
//!   existing text without touching the surrounding characters
//!
//! # Example
//!
//! ```
//! use numfmt::{format_numbers_in_string, lower_roman, upper_letters};
//!
//! // Labels for a sequence of figures
//! assert_eq!(lower_roman(4)?, "iv");
//! assert_eq!(upper_letters(28)?, "AB");
//!
//! // Tidy the numbers inside generated markup
//! let path = format_numbers_in_string("M 0.30000001 1e2", None)?;
//! assert_eq!(path, "M 0.3 100");
//! # Ok::<(), numfmt::NumFmtError>(())
//! ```

pub mod counting;
pub mod error;
pub mod floats;

// Re-export error types
pub use error::{NumFmtError, Result};

// Re-export counting systems
pub use counting::{
    lower_letters, lower_roman, parse_letters, parse_roman, upper_letters, upper_roman,
};

// Re-export float formatting
pub use floats::{
    DEFAULT_NDIGITS, ToFloat, extract_float_strs, extract_floats, fill_template, format_float,
    format_number, format_numbers, format_numbers_in_string, map_floats,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
