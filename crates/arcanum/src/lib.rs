//! # Arcanum
//!
//! Exact reconstruction of a polynomial's constant term from k-of-n
//! shares.
//!
//! Each share carries a y-value as a digit string in its own base
//! (2–36). Arcanum decodes the shares into arbitrary precision
//! integers, interpolates the unique degree-(k-1) polynomial through
//! the k lowest x-coordinates with exact rational Gaussian elimination,
//! and reads off the constant term. Results are exact: a non-integer
//! constant is reported as a reduced fraction, never rounded.
//!
//! ## Quick Start
//!
//! ```
//! use arcanum::prelude::*;
//!
//! let doc = Document::from_json(r#"{
//!     "keys": {"n": 3, "k": 3},
//!     "1": {"base": "10", "value": "3"},
//!     "2": {"base": "2", "value": "111"},
//!     "3": {"base": "10", "value": "13"}
//! }"#).unwrap();
//!
//! let c = constant_term(&doc).unwrap();
//! assert_eq!(format_constant(&c), "c = 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use arcanum_integers as integers;
pub use arcanum_solve as solver;

pub mod document;
pub mod reconstruct;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::document::{Document, InputError, Share};
    pub use crate::reconstruct::{constant_term, format_constant, ReconstructError};
    pub use arcanum_integers::{Fraction, Integer};
    pub use arcanum_solve::{decode, solve, SolveError};
}
