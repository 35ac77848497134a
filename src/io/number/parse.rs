//! # Parsing
//!
//! Text is read most significant glyph first; the digits are stored the other way around.
use std::str::FromStr;

use crate::data::number_types::based::{Base, BasedNumber, Digits};
use crate::io::error::{Error, Result};
use crate::io::number::numeral;

impl BasedNumber {
    /// Read a number written in a base.
    ///
    /// Leading zeros are accepted and dropped.
    ///
    /// # Arguments
    ///
    /// * `text`: Glyphs from `0123456789ABCDEF`, most significant first.
    /// * `base`: Base the text is written in.
    ///
    /// # Errors
    ///
    /// `InvalidBase` if the base isn't supported, `Empty` if there is no text, and
    /// `InvalidDigit` for the first glyph that is not a digit in the base.
    pub fn parse(text: &str, base: u32) -> Result<Self> {
        Self::parse_in(text, Base::new(base)?)
    }

    /// Read a number written in a validated base.
    ///
    /// # Errors
    ///
    /// See `BasedNumber::parse`.
    pub fn parse_in(text: &str, base: Base) -> Result<Self> {
        Ok(Self::from_digits(digits(text, base)?, base))
    }
}

/// Decimal text.
impl FromStr for BasedNumber {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse_in(text, Base::DECIMAL)
    }
}

/// Digits of the text, least significant first.
fn digits(text: &str, base: Base) -> Result<Digits> {
    if text.is_empty() {
        return Err(Error::Empty);
    }

    let mut digits = text.chars().enumerate()
        .map(|(position, glyph)| match numeral::value(glyph) {
            Some(digit) if base.admits(digit) => Ok(digit),
            _ => Err(Error::InvalidDigit { glyph, position, base }),
        })
        .collect::<Result<Digits>>()?;
    digits.reverse();

    Ok(digits)
}

#[cfg(test)]
mod test {
    use crate::data::number_types::based::{Base, BasedNumber};
    use crate::io::error::Error;

    #[test]
    fn test_digit_order() {
        let x = BasedNumber::parse("A4E", 16).unwrap();
        assert_eq!(x.digits(), &[14, 4, 10]);
        assert_eq!(x.base(), Base::HEXADECIMAL);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(BasedNumber::parse("0070", 8).unwrap().digits(), &[0, 7]);
        assert_eq!(BasedNumber::parse("0000", 3).unwrap().digits(), &[0]);
        assert!(BasedNumber::parse("00", 1).unwrap().is_zero());
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            BasedNumber::parse("G", 16),
            Err(Error::InvalidDigit { glyph: 'G', position: 0, base: Base::HEXADECIMAL }),
        );
        assert_eq!(
            BasedNumber::parse("2", 1),
            Err(Error::InvalidDigit { glyph: '2', position: 0, base: Base::MIN }),
        );
        assert_eq!(
            BasedNumber::parse("1019", 9),
            Err(Error::InvalidDigit { glyph: '9', position: 3, base: Base::new(9).unwrap() }),
        );
        assert!(matches!(BasedNumber::parse("1", 1), Err(Error::InvalidDigit { .. })));
        assert!(matches!(BasedNumber::parse("a", 16), Err(Error::InvalidDigit { .. })));
        assert!(matches!(BasedNumber::parse("-1", 10), Err(Error::InvalidDigit { .. })));
        assert!(matches!(BasedNumber::parse(" 1", 10), Err(Error::InvalidDigit { .. })));
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(BasedNumber::parse("1", 17), Err(Error::InvalidBase { base: 17 }));
        assert_eq!(BasedNumber::parse("0", 0), Err(Error::InvalidBase { base: 0 }));
    }

    #[test]
    fn test_empty() {
        assert_eq!(BasedNumber::parse("", 10), Err(Error::Empty));
        // The base is checked first
        assert_eq!(BasedNumber::parse("", 20), Err(Error::InvalidBase { base: 20 }));
    }

    #[test]
    fn test_from_str() {
        let x: BasedNumber = "2638".parse().unwrap();
        assert_eq!(x.base(), Base::DECIMAL);
        assert_eq!(x.digits(), &[8, 3, 6, 2]);
        assert!("A".parse::<BasedNumber>().is_err());
    }
}
