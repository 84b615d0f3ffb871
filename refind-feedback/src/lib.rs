//! # refind-feedback
//!
//! Query adaptation from labeled results. Four strategies implement
//! [`IRelevanceFeedback`](refind_core::IRelevanceFeedback):
//! - [`BayesianShift`]: moves the query to the positive centroid plus a
//!   discriminant correction.
//! - [`Rocchio`]: linear recombination of query and feedback means.
//! - [`MarsGaussian`] / [`MarsGaussianImproved`]: per-feature reweighting by
//!   inverse deviation of the positives.
//! - [`NearestNeighbors`]: re-ranks by an [`IScore`](refind_core::IScore).
//!
//! The [`session`] module drives repeated rounds against a labeler.

pub mod scores;
pub mod session;
pub mod strategies;

pub use scores::{BayesScore, NnBayesScore, NnRegularizedScore, NnScore};
pub use session::{
    ClassLabelOracle, FeedbackSession, ILabeler, LabelAssistant, Labels, RoundReport,
    SessionReport, StopReason,
};
pub use strategies::{
    shift_query, BayesianShift, MarsGaussian, MarsGaussianImproved, NearestNeighbors, Rocchio,
};
