//! Square fraction matrix used by the elimination.
//!
//! Row-major storage with the row operations Gaussian elimination
//! needs. Entries left of the current pivot column are already zero by
//! the time a row is scaled, so the ranged operations only touch the
//! suffix of each row.

use std::ops::{Index, IndexMut};

use arcanum_integers::Fraction;
use num_traits::Zero;

/// A k×k matrix of exact fractions, owned by a single solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Matrix {
    data: Vec<Fraction>,
    n: usize,
}

impl Matrix {
    pub(crate) fn zeros(n: usize) -> Self {
        Self {
            data: vec![Fraction::zero(); n * n],
            n,
        }
    }

    /// Swaps two rows in place.
    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for col in 0..self.n {
            self.data.swap(i * self.n + col, j * self.n + col);
        }
    }

    /// Scales row entries from column `start` onward by `factor`.
    pub(crate) fn scale_row_from(&mut self, row: usize, start: usize, factor: &Fraction) {
        for col in start..self.n {
            self[(row, col)] = &self[(row, col)] * factor;
        }
    }

    /// Subtracts `factor * row[source]` from `row[target]`, from column
    /// `start` onward.
    pub(crate) fn sub_scaled_row_from(
        &mut self,
        target: usize,
        source: usize,
        start: usize,
        factor: &Fraction,
    ) {
        for col in start..self.n {
            let scaled = factor * &self[(source, col)];
            self[(target, col)] = &self[(target, col)] - &scaled;
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Fraction;

    fn index(&self, (row, col): (usize, usize)) -> &Fraction {
        &self.data[row * self.n + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Fraction {
        &mut self.data[row * self.n + col]
    }
}
