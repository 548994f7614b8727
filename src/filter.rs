use nalgebra::Scalar;
use num::traits::{One, Zero};

use crate::{covariance::Covariance, state::State};

/// A Kalman filter holding one [`State`] and one [`Covariance`] of the same
/// scalar type and dimension.
///
/// Only the freshly-initialized form exists here: zero state, identity
/// covariance. Prediction and update steps are expected to live outside this
/// type, consuming the copies returned by [`state`](Filter::state) and
/// [`covariance`](Filter::covariance) and rebuilding members through the
/// containers' construction paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter<T: Scalar, const N: usize> {
    state: State<T, N>,
    covariance: Covariance<T, N>,
}

impl<T, const N: usize> Filter<T, N>
where
    T: Scalar + Copy,
{
    /// The filter dimension (number of state variables).
    pub fn size(&self) -> usize {
        N
    }

    /// An independent copy of the current state.
    pub fn state(&self) -> State<T, N> {
        self.state
    }

    /// An independent copy of the current covariance.
    pub fn covariance(&self) -> Covariance<T, N> {
        self.covariance
    }
}

impl<T, const N: usize> Default for Filter<T, N>
where
    T: Scalar + Zero + One,
{
    /// Zero state vector, identity covariance matrix.
    fn default() -> Self {
        Self {
            state: State::default(),
            covariance: Covariance::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = Filter::<f64, 2>::default();

        assert_eq!(filter.size(), 2);

        let state = filter.state();
        assert_eq!(state.at(0), 0.0);
        assert_eq!(state.at(1), 0.0);

        let cov = filter.covariance();
        assert_eq!(cov.at(0, 0), 1.0);
        assert_eq!(cov.at(1, 1), 1.0);
        assert_eq!(cov.at(0, 1), 0.0);
        assert_eq!(cov.at(1, 0), 0.0);
    }

    #[test]
    fn test_default_filter_integer_scalar() {
        let filter = Filter::<i32, 1>::default();

        assert_eq!(filter.size(), 1);
        assert_eq!(filter.state().at(0), 0);
        assert_eq!(filter.covariance().at(0, 0), 1);
    }

    #[test]
    fn test_sizes_match_members() {
        let filter = Filter::<f32, 3>::default();

        assert_eq!(filter.size(), 3);
        assert_eq!(filter.state().size(), 3);
        assert_eq!(filter.covariance().size(), 3);
    }

    #[test]
    fn test_accessors_return_independent_copies() {
        let filter = Filter::<f64, 2>::default();

        let mut state = filter.state();
        assert_eq!(state.at(0), 0.0);
        state = State::from_slice(&[5.0, 5.0]);
        assert_eq!(state.at(0), 5.0);

        let mut cov = filter.covariance();
        assert_eq!(cov.at(0, 1), 0.0);
        cov = Covariance::new([[9.0, 9.0], [9.0, 9.0]]);
        assert_eq!(cov.at(0, 1), 9.0);

        // The filter's own members are untouched.
        assert_eq!(filter.state().at(0), 0.0);
        assert_eq!(filter.covariance().at(0, 0), 1.0);
        assert_eq!(filter.covariance().at(0, 1), 0.0);
    }
}
