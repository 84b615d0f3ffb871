//! [`IScore`](refind_core::IScore) implementations built on the distance to
//! the nearest labeled neighbors.

mod bayes;
mod nn;
mod nn_bayes;
mod regularized;

pub use bayes::BayesScore;
pub use nn::NnScore;
pub use nn_bayes::NnBayesScore;
pub use regularized::NnRegularizedScore;

use refind_core::{DescriptorType, IMetric, Item, RefindResult};
use std::sync::Arc;

/// Distance from `candidate` to its closest member of `labeled`, or `None`
/// when `labeled` is empty.
pub(crate) fn nearest_distance(
    metric: &dyn IMetric,
    candidate: &Item,
    labeled: &[Arc<Item>],
    ty: DescriptorType,
) -> RefindResult<Option<f64>> {
    let mut best: Option<f64> = None;
    for other in labeled {
        let d = metric.distance(candidate, other, ty)?;
        if best.map_or(true, |b| d < b) {
            best = Some(d);
        }
    }
    Ok(best)
}

/// `(dR, dN)`: distances to the nearest positive and nearest negative, or
/// `None` if either feedback set is empty.
pub(crate) fn neighbor_distances(
    metric: &dyn IMetric,
    query: &Item,
    candidate: &Item,
    ty: DescriptorType,
) -> RefindResult<Option<(f64, f64)>> {
    let relevant = nearest_distance(metric, candidate, query.positives(), ty)?;
    let irrelevant = nearest_distance(metric, candidate, query.negatives(), ty)?;
    Ok(relevant.zip(irrelevant))
}
