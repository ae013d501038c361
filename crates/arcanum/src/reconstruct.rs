//! Share selection, decoding, and constant-term extraction.

use arcanum_integers::{Fraction, Integer};
use arcanum_solve::{decode, solve, SolveError};
use thiserror::Error;
use tracing::debug;

use crate::document::{Document, InputError};

/// Errors raised while reconstructing the constant term.
#[derive(Debug, Error)]
pub enum ReconstructError {
    /// The share document failed validation.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Decoding or solving failed.
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Reconstructs the constant term of the polynomial the shares encode.
///
/// Decodes every share, sorts by x-coordinate, and interpolates through
/// the `k` lowest points. The constant term is the last coefficient of
/// the solved system.
///
/// # Errors
///
/// Returns [`InputError`] variants for an invalid document or a
/// threshold the document cannot satisfy, and [`SolveError`] variants
/// when a share fails to decode or the selected points are degenerate.
pub fn constant_term(doc: &Document) -> Result<Fraction, ReconstructError> {
    let k = doc.k();
    if k == 0 {
        return Err(InputError::ZeroPoints.into());
    }

    let mut shares = doc.shares()?;
    if k > shares.len() {
        return Err(InputError::NotEnoughShares {
            k,
            available: shares.len(),
        }
        .into());
    }

    shares.sort_by_key(|s| s.x);
    shares.truncate(k);
    debug!(k, n = doc.n(), "selected lowest k shares");

    let mut xs = Vec::with_capacity(k);
    let mut ys = Vec::with_capacity(k);
    for share in &shares {
        xs.push(Integer::new(share.x));
        ys.push(decode(&share.value, share.base)?);
    }

    let mut coeffs = solve(&xs, &ys)?;
    match coeffs.pop() {
        Some(c) => Ok(c),
        // Unreachable: k >= 1 was checked above.
        None => Err(InputError::ZeroPoints.into()),
    }
}

/// Formats the constant term the way the CLI prints it.
///
/// Integer results print as `c = N`; anything else is reported as the
/// reduced fraction it is, never rounded.
#[must_use]
pub fn format_constant(c: &Fraction) -> String {
    if c.is_integer() {
        format!("c = {}", c.numerator())
    } else {
        format!("c is not an integer: {}/{}", c.numerator(), c.denominator())
    }
}
