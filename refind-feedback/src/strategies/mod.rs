//! [`IRelevanceFeedback`](refind_core::IRelevanceFeedback) implementations.

mod bayesian;
mod mars_gaussian;
mod nearest_neighbors;
mod rocchio;

pub use bayesian::{shift_query, shifted_vector, BayesianShift};
pub use mars_gaussian::{reweight_features, MarsGaussian, MarsGaussianImproved};
pub use nearest_neighbors::NearestNeighbors;
pub use rocchio::Rocchio;
