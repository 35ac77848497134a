//! # Interoperability with `num`
//!
//! Moving values to and from `BigUint`, which stores them in machine words.
use num::{BigUint, Zero};

use crate::data::number_types::based::{Base, BasedNumber};
use crate::io::error::{Error, Result};

impl BasedNumber {
    /// Write a big integer in a base.
    ///
    /// # Errors
    ///
    /// `Unrepresentable` if the value is not zero and the base is 1.
    pub fn from_biguint(value: &BigUint, base: Base) -> Result<Self> {
        if value.is_zero() {
            return Ok(Self::zero(base));
        }
        if base == Base::MIN {
            return Err(Error::Unrepresentable { base });
        }

        let digits = value.to_radix_le(base.get() as u32).into_iter().collect();

        Ok(Self::from_digits(digits, base))
    }
}

impl From<&BasedNumber> for BigUint {
    fn from(value: &BasedNumber) -> Self {
        let radix = BigUint::from(value.base.get());

        value.digits.iter().rev()
            .fold(BigUint::zero(), |total, &digit| total * &radix + BigUint::from(digit))
    }
}
