//! # arcanum-solve
//!
//! Exact polynomial interpolation over the rationals.
//!
//! This crate provides:
//! - Arbitrary-base digit decoding into big integers (`decode`)
//! - A Vandermonde system solver using exact Gaussian elimination
//!   (`solve`)
//!
//! All arithmetic runs over normalized fractions of arbitrary precision
//! integers, so the recovered coefficients are exact: an integer answer
//! comes back with denominator 1 and a non-integer answer is reported as
//! a reduced fraction instead of a rounded value.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decode;
pub mod error;
pub mod vandermonde;

mod matrix;

#[cfg(test)]
mod proptests;

pub use decode::decode;
pub use error::SolveError;
pub use vandermonde::solve;
