//! # Formatting
use std::fmt;

use crate::data::number_types::based::BasedNumber;
use crate::io::number::numeral;

/// Most significant glyph first, without base prefix.
///
/// Width, fill and alignment flags are honored.
impl fmt::Display for BasedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.digits().iter().rev()
            .map(|&digit| numeral::glyph(digit))
            .collect::<String>();

        f.pad(&text)
    }
}
