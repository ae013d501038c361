//! # arcanum-integers
//!
//! Exact arithmetic foundation for arcanum.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Normalized exact fractions (`Fraction`)
//!
//! Every fraction is kept fully reduced with a positive denominator, so
//! downstream linear algebra never observes an unnormalized value and
//! results carry no rounding error of any kind.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fraction;
pub mod integer;

#[cfg(test)]
mod proptests;

pub use fraction::{DivisionByZero, Fraction};
pub use integer::Integer;
