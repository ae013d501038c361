//! Error types for decoding and solving.

use arcanum_integers::DivisionByZero;
use thiserror::Error;

/// Errors surfaced by the decoder and the Vandermonde solver.
///
/// None of these are recoverable: the computation is deterministic, so
/// the caller must reject the input rather than retry or substitute an
/// approximate result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// A character in a value string is not a valid digit for its base.
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The base the value was declared in.
        base: u32,
    },

    /// A fraction with a zero denominator was constructed, or the
    /// reciprocal of zero was taken.
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZero),

    /// Elimination found no nonzero pivot in some column, which for a
    /// Vandermonde system means two x-coordinates coincide.
    #[error("singular system: no pivot in column {column} (duplicate x-coordinates)")]
    SingularSystem {
        /// The column with no usable pivot.
        column: usize,
    },
}
