//! # Addition
use std::cmp;

use itertools::{EitherOrBoth, Itertools};
use log::trace;

use crate::data::number_types::based::{Base, BasedNumber, Digit, Digits, Wide};
use crate::io::error::Result;

impl BasedNumber {
    /// Sum of two numbers in the same base.
    ///
    /// # Errors
    ///
    /// `BaseMismatch` if the bases differ.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        let base = self.common_base(rhs)?;

        Ok(Self::from_digits(add_digits(&self.digits, &rhs.digits, base), base))
    }

    /// Sum of this number and all others, added from left to right.
    ///
    /// # Errors
    ///
    /// `BaseMismatch` as soon as a term is in a different base.
    pub fn add_all<'a>(&self, rest: impl IntoIterator<Item = &'a Self>) -> Result<Self> {
        let mut sum = self.clone();
        let mut terms = 1;
        for term in rest {
            sum = sum.add(term)?;
            terms += 1;
        }
        trace!("Added {} terms in base {}", terms, sum.base);

        Ok(sum)
    }
}

/// Digit-wise addition with carry.
///
/// The result has one guard digit more than the longest operand, which is zero when the last
/// carry is zero.
fn add_digits(left: &[Digit], right: &[Digit], base: Base) -> Digits {
    let radix = base.wide();

    let mut result = Digits::with_capacity(cmp::max(left.len(), right.len()) + 1);
    let mut carry: Wide = 0;
    for pair in left.iter().zip_longest(right) {
        let total = match pair {
            EitherOrBoth::Both(&l, &r) => l as Wide + r as Wide,
            EitherOrBoth::Left(&digit) | EitherOrBoth::Right(&digit) => digit as Wide,
        } + carry;

        result.push((total % radix) as Digit);
        carry = total / radix;
        // Both digits are below the base
        debug_assert!(carry <= 1);
    }
    result.push(carry as Digit);

    result
}
