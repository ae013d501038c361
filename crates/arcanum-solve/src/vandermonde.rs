//! Exact Vandermonde interpolation.
//!
//! Builds the k×k Vandermonde system for k sample points and solves it
//! with Gaussian elimination over exact fractions. Pivoting picks the
//! first nonzero candidate: with exact arithmetic there is no stability
//! argument for magnitude-based pivoting, and a missing pivot can only
//! mean two x-coordinates coincide.

use arcanum_integers::{Fraction, Integer};
use num_traits::{One, Zero};

use crate::matrix::Matrix;
use crate::SolveError;

/// Solves for the coefficients of the unique polynomial of degree at
/// most `k-1` passing through the points `(xs[i], ys[i])`.
///
/// The result is ordered from the `x^(k-1)` coefficient down to the
/// constant term, each an exact fraction. Evaluating the returned
/// polynomial at any `xs[i]` reproduces `ys[i]` exactly.
///
/// # Errors
///
/// Returns [`SolveError::SingularSystem`] when the x-coordinates are
/// not pairwise distinct. [`SolveError::DivisionByZero`] cannot occur
/// for a well-formed system; it is propagated rather than unwrapped so
/// a logic error never panics.
///
/// # Panics
///
/// Panics if `xs` and `ys` have different lengths.
pub fn solve(xs: &[Integer], ys: &[Integer]) -> Result<Vec<Fraction>, SolveError> {
    assert_eq!(xs.len(), ys.len(), "one y-value per x-coordinate");
    let k = xs.len();

    // Row i holds the powers of xs[i], highest degree in column 0.
    let mut a = Matrix::zeros(k);
    for (i, x) in xs.iter().enumerate() {
        let mut power = Integer::one();
        for j in (0..k).rev() {
            a[(i, j)] = Fraction::from_integer(power.clone());
            power = power * x;
        }
    }
    let mut y: Vec<Fraction> = ys
        .iter()
        .map(|v| Fraction::from_integer(v.clone()))
        .collect();

    // Forward elimination, one column at a time.
    for col in 0..k {
        let pivot = (col..k)
            .find(|&row| !a[(row, col)].is_zero())
            .ok_or(SolveError::SingularSystem { column: col })?;
        if pivot != col {
            a.swap_rows(col, pivot);
            y.swap(col, pivot);
        }

        // Scale the pivot row so the pivot becomes exactly 1.
        let inv = a[(col, col)].recip()?;
        a.scale_row_from(col, col, &inv);
        y[col] = &y[col] * &inv;

        for row in col + 1..k {
            let factor = a[(row, col)].clone();
            if factor.is_zero() {
                continue;
            }
            a.sub_scaled_row_from(row, col, col, &factor);
            y[row] = &y[row] - &(&factor * &y[col]);
        }
    }

    // Back substitution. Pivots are 1, so no division is needed.
    let mut coeffs = vec![Fraction::zero(); k];
    for i in (0..k).rev() {
        let mut acc = y[i].clone();
        for j in i + 1..k {
            acc = &acc - &(&a[(i, j)] * &coeffs[j]);
        }
        coeffs[i] = acc;
    }
    Ok(coeffs)
}
