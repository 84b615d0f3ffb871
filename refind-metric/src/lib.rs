//! # refind-metric
//!
//! Pluggable distance functions over descriptor vectors: Euclidean,
//! Manhattan, cosine, and weighted Euclidean/cosine with lazily derived
//! descriptor-balanced weights. Also hosts the feature statistics and
//! database normalization shared by the feedback strategies.

pub mod metrics;
pub mod normalize;
pub mod stats;
pub mod vector;
pub mod weights;

pub use metrics::{Cosine, Euclidean, Manhattan, WeightedCosine, WeightedEuclidean};
pub use normalize::{normalize_configured, normalize_database};
pub use weights::{balanced_weights, LazyWeights};
