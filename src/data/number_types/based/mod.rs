//! # Based numbers
//!
//! A natural number of arbitrary size, stored as its digits in a fixed base.
//!
//! Values never change after construction: every operation allocates a new number for its
//! result.
use std::convert::TryFrom;
use std::fmt;

use smallvec::SmallVec;

use crate::io::error::{Error, Result};
use crate::io::number::numeral::ALPHABET;

mod add;
mod big;
mod convert;
mod mul;

/// A single digit, always smaller than the base it's written in.
pub type Digit = u8;
/// Room for intermediate values of digit arithmetic.
///
/// Products of two digits plus two carries stay below `Base::MAX` squared.
pub(crate) type Wide = u32;

/// Most numbers of interest fit inline.
const INLINE_DIGITS: usize = 16;
pub(crate) type Digits = SmallVec<[Digit; INLINE_DIGITS]>;

/// Radix of a positional numeral system, between 1 and the alphabet length (inclusive).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Base(u8);

impl Base {
    /// Smallest supported base, in which only zero can be written.
    pub const MIN: Self = Self(1);
    /// Largest supported base, one digit per glyph in the alphabet.
    pub const MAX: Self = Self(ALPHABET.len() as u8);
    /// Base 10.
    pub const DECIMAL: Self = Self(10);
    /// Base 16.
    pub const HEXADECIMAL: Self = Self(16);

    /// Validate a base.
    ///
    /// # Errors
    ///
    /// `InvalidBase` if the value lies outside `[Base::MIN, Base::MAX]`.
    pub fn new(base: u32) -> Result<Self> {
        if base >= Self::MIN.0 as u32 && base <= Self::MAX.0 as u32 {
            Ok(Self(base as u8))
        } else {
            Err(Error::InvalidBase { base })
        }
    }

    /// The radix as a number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether a digit value can appear in numbers of this base.
    pub fn admits(self, digit: Digit) -> bool {
        digit < self.0
    }

    pub(crate) fn wide(self) -> Wide {
        self.0 as Wide
    }
}

impl TryFrom<u32> for Base {
    type Error = Error;

    fn try_from(base: u32) -> Result<Self> {
        Self::new(base)
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.0 as u32
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A natural number written in a base between 1 and 16.
///
/// Equality is structural: numbers with the same value in different bases are not equal. Convert
/// one of them first.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BasedNumber {
    /// Least significant digit first, never empty, no high zeros unless the value is zero.
    digits: Digits,
    base: Base,
}

impl BasedNumber {
    /// Wrap digits, removing high zeros.
    ///
    /// # Arguments
    ///
    /// * `digits`: Least significant first, each admitted by `base`.
    pub(crate) fn from_digits(mut digits: Digits, base: Base) -> Self {
        debug_assert!(digits.iter().all(|&digit| base.admits(digit)));

        normalize(&mut digits);

        Self { digits, base }
    }

    /// The number zero.
    pub fn zero(base: Base) -> Self {
        Self { digits: smallvec![0], base }
    }

    /// The number one.
    ///
    /// # Errors
    ///
    /// `Unrepresentable` in base 1.
    pub fn one(base: Base) -> Result<Self> {
        Self::from_u64(1, base)
    }

    /// Base the digits are written in.
    pub fn base(&self) -> Base {
        self.base
    }

    /// Digits, least significant first.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of digits needed to write the value down; at least one.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.digits[..] == [0]
    }

    /// The base shared by two operands.
    pub(crate) fn common_base(&self, other: &Self) -> Result<Base> {
        if self.base == other.base {
            Ok(self.base)
        } else {
            Err(Error::BaseMismatch { left: self.base, right: other.base })
        }
    }
}

/// Remove high zero digits, keeping a single zero if nothing else is left.
fn normalize(digits: &mut Digits) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}
