use nalgebra::Scalar;
use num::traits::Zero;

use crate::types::StateVec;

/// A fixed-dimension state vector holding the `N` estimated variables of a
/// Kalman filter.
///
/// The dimension is part of the type, so a `State` can never be resized, and
/// mixing dimensions is rejected at compile time. Once built, a `State` is an
/// immutable value: copies are independent and there are no mutating methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<T: Scalar, const N: usize> {
    vector: StateVec<T, N>,
}

impl<T, const N: usize> State<T, N>
where
    T: Scalar + Copy + Zero,
{
    /// Builds a state from a fixed-length array, copying the `N` values in
    /// order. The array type guarantees the length matches the dimension.
    pub fn new(values: [T; N]) -> Self {
        Self {
            vector: StateVec::from(values),
        }
    }

    /// Builds a state from a runtime-sized slice.
    ///
    /// The first `min(values.len(), N)` elements are copied at matching
    /// indices. If the slice is shorter than `N`, the trailing entries stay
    /// zero. If it is longer, the surplus is ignored. A length mismatch is
    /// never an error.
    pub fn from_slice(values: &[T]) -> Self {
        let mut vector = StateVec::zeros();
        for (i, &value) in values.iter().take(N).enumerate() {
            vector[i] = value;
        }
        Self { vector }
    }

    /// Number of entries in the state vector.
    pub fn size(&self) -> usize {
        N
    }

    /// Returns the value at `index`, or zero when the index is out of range.
    pub fn at(&self, index: usize) -> T {
        if index < N { self.vector[index] } else { T::zero() }
    }
}

impl<T, const N: usize> Default for State<T, N>
where
    T: Scalar + Zero,
{
    /// The all-zero state.
    fn default() -> Self {
        Self {
            vector: StateVec::zeros(),
        }
    }
}

impl<T: Scalar, const N: usize> From<StateVec<T, N>> for State<T, N> {
    fn from(vector: StateVec<T, N>) -> Self {
        Self { vector }
    }
}

impl<T, const N: usize> From<[T; N]> for State<T, N>
where
    T: Scalar + Copy + Zero,
{
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}
