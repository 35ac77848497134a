//! # Base conversion
//!
//! Rewriting a number in another base only takes addition and multiplication in the target base.
//! The one place where two bases meet is in writing a single small value in the target base.
use log::trace;

use crate::data::number_types::based::{Base, BasedNumber, Digit, Digits};
use crate::io::error::{Error, Result};

impl BasedNumber {
    /// The same value, written in another base.
    ///
    /// # Arguments
    ///
    /// * `target`: Base to write the value in.
    ///
    /// # Errors
    ///
    /// `InvalidBase` if the target isn't a supported base, `Unrepresentable` if the value is not
    /// zero and the target is base 1.
    pub fn convert_base(&self, target: u32) -> Result<Self> {
        self.to_base(Base::new(target)?)
    }

    /// The same value, written in another base.
    ///
    /// Sums every digit times the matching power of the source base, evaluated in the target
    /// base.
    ///
    /// # Errors
    ///
    /// `Unrepresentable` if the value is not zero and the target is base 1.
    pub fn to_base(&self, target: Base) -> Result<Self> {
        if self.base == target {
            return Ok(self.clone());
        }
        trace!(
            "Converting {} digits from base {} to base {}", self.digits.len(), self.base, target,
        );
        // Also covers all values in base 1
        if self.is_zero() {
            return Ok(Self::zero(target));
        }

        let radix = Self::from_u64(self.base.get() as u64, target)?;
        let digit_values = (0..self.base.get())
            .map(|digit| Self::from_u64(digit as u64, target))
            .collect::<Result<Vec<_>>>()?;

        let mut weight = Self::one(target)?;
        let mut sum = Self::zero(target);
        for (position, &digit) in self.digits.iter().enumerate() {
            if position > 0 {
                weight = weight.multiply(&radix)?;
            }
            if digit != 0 {
                let term = digit_values[digit as usize].multiply(&weight)?;
                sum = sum.add(&term)?;
            }
        }

        Ok(sum)
    }

    /// Write a machine integer in a base.
    ///
    /// # Errors
    ///
    /// `Unrepresentable` if the value is not zero and the base is 1.
    pub fn from_u64(mut value: u64, base: Base) -> Result<Self> {
        if value == 0 {
            return Ok(Self::zero(base));
        }
        if base == Base::MIN {
            return Err(Error::Unrepresentable { base });
        }

        let radix = base.get() as u64;
        let mut digits = Digits::new();
        while value > 0 {
            digits.push((value % radix) as Digit);
            value /= radix;
        }

        Ok(Self::from_digits(digits, base))
    }
}
