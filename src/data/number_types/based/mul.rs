//! # Multiplication
//!
//! Schoolbook multiplication, quadratic in the number of digits.
use log::trace;
use smallvec::SmallVec;

use crate::data::number_types::based::{Base, BasedNumber, Digit, Digits, Wide, INLINE_DIGITS};
use crate::io::error::Result;

impl BasedNumber {
    /// Product of two numbers in the same base.
    ///
    /// # Errors
    ///
    /// `BaseMismatch` if the bases differ.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        let base = self.common_base(rhs)?;

        Ok(Self::from_digits(multiply_digits(&self.digits, &rhs.digits, base), base))
    }

    /// Product of this number and all others, multiplied from left to right.
    ///
    /// # Errors
    ///
    /// `BaseMismatch` as soon as a factor is in a different base.
    pub fn multiply_all<'a>(&self, rest: impl IntoIterator<Item = &'a Self>) -> Result<Self> {
        let mut product = self.clone();
        let mut factors = 1;
        for factor in rest {
            product = product.multiply(factor)?;
            factors += 1;
        }
        trace!("Multiplied {} factors in base {}", factors, product.base);

        Ok(product)
    }
}

/// Multiply digit by digit, accumulating into position `outer + inner`.
///
/// A product of numbers with `m` and `n` digits has at most `m + n` digits, so that's the size of
/// the result. High positions that turn out unused are zero.
fn multiply_digits(left: &[Digit], right: &[Digit], base: Base) -> Digits {
    let radix = base.wide();

    let mut result: SmallVec<[Wide; INLINE_DIGITS]> = smallvec![0; left.len() + right.len()];
    for (outer, &factor) in right.iter().enumerate() {
        if factor == 0 {
            continue;
        }

        let mut carry = 0;
        for (inner, &digit) in left.iter().enumerate() {
            let total = result[outer + inner] + factor as Wide * digit as Wide + carry;
            result[outer + inner] = total % radix;
            carry = total / radix;
        }
        // No earlier row reaches this far
        debug_assert_eq!(result[outer + left.len()], 0);
        debug_assert!(carry < radix);
        result[outer + left.len()] = carry;
    }

    result.into_iter().map(|digit| digit as Digit).collect()
}
