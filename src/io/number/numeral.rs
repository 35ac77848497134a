//! # Numeral alphabet
//!
//! Digits `0` through `9` followed by the uppercase letters `A` through `F`. The length of the
//! alphabet bounds the largest supported base.
use crate::data::number_types::based::Digit;

/// Glyphs by digit value.
pub const ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// Value of a glyph, if it is part of the alphabet.
///
/// Lowercase letters are not accepted.
pub fn value(glyph: char) -> Option<Digit> {
    match glyph {
        '0'..='9' => Some(glyph as Digit - b'0'),
        'A'..='F' => Some(glyph as Digit - b'A' + 10),
        _ => None,
    }
}

/// Glyph of a digit value.
///
/// # Arguments
///
/// * `digit`: Value smaller than the alphabet length.
pub fn glyph(digit: Digit) -> char {
    debug_assert!((digit as usize) < ALPHABET.len());

    ALPHABET[digit as usize] as char
}
