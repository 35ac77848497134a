//! # Based
//!
//! Arbitrary precision natural numbers, written down in any positional base from 1 up to and
//! including 16.
//!
//! Numbers are stored as a sequence of digits rather than in machine words, so that the digits of
//! a value are directly those of its textual representation. Only addition and multiplication are
//! provided; conversion between bases is built entirely out of those two.
//!
//! ```
//! use based::BasedNumber;
//!
//! let x = BasedNumber::parse("A4E", 16).unwrap();
//! assert_eq!(x.convert_base(10).unwrap().to_string(), "2638");
//! ```
#![warn(missing_docs)]

#[macro_use]
extern crate smallvec;

pub use crate::data::number_types::based::{Base, BasedNumber, Digit};
pub use crate::io::error::{Error, Result};

pub mod data;
pub mod io;
