//! # Reading and writing numbers
//!
//! Numbers are written down most significant digit first, using the glyphs `0-9A-F`.
pub mod error;
pub mod number;
