//! # Errors
//!
//! All errors are a deterministic function of the input; calling again with the same values
//! gives the same error.
use thiserror::Error;

use crate::data::number_types::based::Base;

/// Shorthand for results of operations on based numbers.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an operation on based numbers can fail.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The base is not in the supported range.
    #[error("base {base} is not supported, it should be at least {} and at most {}", Base::MIN, Base::MAX)]
    InvalidBase {
        /// The rejected value.
        base: u32,
    },
    /// A character is not a numeral, or its value is too large for the base.
    #[error("character {glyph:?} at position {position} is not a digit in base {base}")]
    InvalidDigit {
        /// The offending character.
        glyph: char,
        /// Index of the character, counted in characters from the left.
        position: usize,
        /// Base the text was parsed in.
        base: Base,
    },
    /// There were no characters to parse.
    #[error("can't parse a number from empty text")]
    Empty,
    /// The operands of an arithmetic operation are written in different bases.
    #[error("operands are in different bases: {left} and {right}")]
    BaseMismatch {
        /// Base of the left operand.
        left: Base,
        /// Base of the right operand.
        right: Base,
    },
    /// The value has no representation in the base.
    ///
    /// Only happens in base 1, in which zero is the only value that can be written down.
    #[error("value can't be written down in base {base}")]
    Unrepresentable {
        /// The base that lacks the digits.
        base: Base,
    },
}
