//! Distance metrics implementing [`IMetric`](refind_core::IMetric).

mod cosine;
mod euclidean;
mod manhattan;
mod weighted_cosine;
mod weighted_euclidean;

pub use cosine::Cosine;
pub use euclidean::Euclidean;
pub use manhattan::Manhattan;
pub use weighted_cosine::WeightedCosine;
pub use weighted_euclidean::WeightedEuclidean;
