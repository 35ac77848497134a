//! # Number types
//!
//! Natural numbers of arbitrary size in a small base.
pub mod based;
