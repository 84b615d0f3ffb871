//! Centroid shift with a discriminant correction term.

use std::sync::Arc;

use refind_core::{
    DescriptorType, IMetric, IRelevanceFeedback, IRetriever, Item, RefindResult,
};
use refind_metric::stats::{centroid, dispersion};
use refind_metric::vector::squared_distance;
use tracing::{debug, warn};

/// The query's `ty` vector moved toward its accumulated positives.
///
/// `shifted = muR + (s2 / |muR - muN|^2) * (1 - (NR - NN) / max(NR, NN)) * (muR - muN)`
/// where `s2` is scatter-between times scatter-within. An empty side has a
/// zero centroid. Without any labels the vector is returned unchanged, and
/// coincident centroids drop the correction term.
///
/// The imbalance ratio `(NR - NN) / max(NR, NN)` is a real division, so
/// unequal non-empty sides scale the correction. A truncating integer ratio
/// would instead pin the imbalance term at 1 whenever `NR >= NN > 0`.
pub fn shifted_vector(query: &Item, ty: DescriptorType) -> RefindResult<Vec<f64>> {
    let current = query.values(ty)?;
    let positives = query.positives();
    let negatives = query.negatives();
    let (nr, nn) = (positives.len(), negatives.len());
    if nr + nn == 0 {
        return Ok(current.to_vec());
    }

    let dims = current.len();
    let relevant = centroid(positives, ty, dims)?;
    let irrelevant = centroid(negatives, ty, dims)?;

    let norm_square = squared_distance(&relevant, &irrelevant);
    let scatter_between = norm_square.sqrt();
    let n = (nr + nn) as f64;
    let scatter_within = ((nr as f64 / n) * dispersion(positives, ty, &relevant)?
        + (nn as f64 / n) * dispersion(negatives, ty, &irrelevant)?)
    .sqrt();
    let sigma_square = scatter_between * scatter_within;

    let imbalance = 1.0 - (nr as f64 - nn as f64) / nr.max(nn) as f64;
    let factor = if norm_square == 0.0 {
        warn!(
            positives = nr,
            negatives = nn,
            "positive and negative centroids coincide, shifting to positive centroid"
        );
        0.0
    } else {
        (sigma_square / norm_square) * imbalance
    };

    debug!(
        positives = nr,
        negatives = nn,
        scatter_between,
        scatter_within,
        factor,
        "centroid shift"
    );
    Ok(relevant
        .iter()
        .zip(&irrelevant)
        .map(|(r, i)| r + factor * (r - i))
        .collect())
}

/// Rewrite the query's `ty` vector with [`shifted_vector`].
pub fn shift_query(query: &mut Item, ty: DescriptorType) -> RefindResult<()> {
    let shifted = shifted_vector(query, ty)?;
    query.replace_values(ty, shifted)
}

/// Bayesian query shift strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BayesianShift;

impl BayesianShift {
    pub fn new() -> Self {
        Self
    }
}

impl IRelevanceFeedback for BayesianShift {
    fn iterate(
        &mut self,
        retriever: &dyn IRetriever,
        query: &mut Item,
        ty: DescriptorType,
        _metric: &dyn IMetric,
        positives: &[Arc<Item>],
        negatives: &[Arc<Item>],
        k: usize,
    ) -> RefindResult<Vec<Arc<Item>>> {
        query.record_feedback(positives, negatives);
        let nr = query.positives().len();
        let nn = query.negatives().len();

        // Nothing to learn from, or every presented slot was already relevant.
        if (nr == 0 && nn == 0) || nr == k {
            return retriever.search(query, ty, k);
        }

        shift_query(query, ty)?;
        retriever.search(query, ty, k)
    }

    fn name(&self) -> &'static str {
        "bayesian"
    }
}
