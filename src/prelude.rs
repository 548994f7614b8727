pub use crate::{
    covariance::Covariance,
    filter::Filter,
    state::State,
    types::{CovMat, StateVec},
};
