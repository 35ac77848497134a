//! # Numerals
//!
//! Conversion between text and digits.
pub mod numeral;
pub mod parse;
mod format;
