pub mod covariance;
pub mod filter;
pub mod prelude;
pub mod state;
pub mod types;

pub use crate::{covariance::Covariance, filter::Filter, state::State};
