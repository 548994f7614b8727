use nalgebra::Scalar;
use num::traits::{One, Zero};

use crate::types::CovMat;

/// A fixed-dimension `N × N` covariance matrix.
///
/// Mirrors [`State`](crate::state::State) in two dimensions: the side length
/// is part of the type, the value is immutable once built, and copies are
/// independent. The default value is the identity matrix, the conventional
/// "no correlation, unit uncertainty" starting point for a filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Covariance<T: Scalar, const N: usize> {
    matrix: CovMat<T, N>,
}

impl<T, const N: usize> Covariance<T, N>
where
    T: Scalar + Copy + Zero,
{
    /// Builds a covariance from a fixed-shape row-major array. The array type
    /// guarantees the shape matches the dimension.
    pub fn new(entries: [[T; N]; N]) -> Self {
        let mut matrix = CovMat::zeros();
        for (i, row) in entries.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                matrix[(i, j)] = value;
            }
        }
        Self { matrix }
    }

    /// Builds a covariance from runtime-sized rows (outer index = row, inner
    /// index = column).
    ///
    /// Each row `i < N` contributes its first `min(row.len(), N)` entries;
    /// rows at index `N` or beyond are skipped. Rows truncate independently,
    /// so a jagged input is fine. Every position the input does not cover
    /// stays zero. A shape mismatch is never an error.
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[T]>,
    {
        let mut matrix = CovMat::zeros();
        for (i, row) in rows.iter().take(N).enumerate() {
            for (j, &value) in row.as_ref().iter().take(N).enumerate() {
                matrix[(i, j)] = value;
            }
        }
        Self { matrix }
    }

    /// Number of rows (equivalently columns) of the matrix.
    pub fn size(&self) -> usize {
        N
    }

    /// Returns the entry at `(row, col)`, or zero when either index is out of
    /// range.
    pub fn at(&self, row: usize, col: usize) -> T {
        if row < N && col < N {
            self.matrix[(row, col)]
        } else {
            T::zero()
        }
    }
}

impl<T, const N: usize> Default for Covariance<T, N>
where
    T: Scalar + Zero + One,
{
    /// The `N × N` identity matrix.
    fn default() -> Self {
        Self {
            matrix: CovMat::identity(),
        }
    }
}

impl<T: Scalar, const N: usize> From<CovMat<T, N>> for Covariance<T, N> {
    fn from(matrix: CovMat<T, N>) -> Self {
        Self { matrix }
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Covariance<T, N>
where
    T: Scalar + Copy + Zero,
{
    fn from(entries: [[T; N]; N]) -> Self {
        Self::new(entries)
    }
}
