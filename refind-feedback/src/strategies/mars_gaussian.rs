//! Per-feature reweighting by the inverse deviation of the positives.

use std::sync::Arc;

use refind_core::{DescriptorType, IMetric, IRelevanceFeedback, IRetriever, Item, RefindResult};
use refind_metric::stats::{deviations, means};
use refind_metric::WeightedEuclidean;
use refind_retrieval::DistanceRetriever;
use tracing::debug;

/// `1 / stddev` per feature over `positives`, or 1 where the deviation is 0.
/// No positives gives all-ones weights of length `dims`.
pub fn reweight_features(
    positives: &[Arc<Item>],
    ty: DescriptorType,
    dims: usize,
) -> RefindResult<Vec<f64>> {
    if positives.is_empty() {
        return Ok(vec![1.0; dims]);
    }
    let mean = means(positives, ty)?;
    Ok(deviations(positives, ty, &mean)?
        .into_iter()
        .map(|d| if d != 0.0 { 1.0 / d } else { 1.0 })
        .collect())
}

fn weighted_search(
    retriever: &dyn IRetriever,
    query: &Item,
    ty: DescriptorType,
    weights: Vec<f64>,
    k: usize,
) -> RefindResult<Vec<Arc<Item>>> {
    DistanceRetriever::linear(
        retriever.database().to_vec(),
        Arc::new(WeightedEuclidean::with_weights(weights)),
    )
    .search(query, ty, k)
}

/// Re-queries with a weighted Euclidean metric whose weights come from the
/// current positives alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarsGaussian;

impl MarsGaussian {
    pub fn new() -> Self {
        Self
    }
}

impl IRelevanceFeedback for MarsGaussian {
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
        let dims = query.values(ty)?.len();
        let weights = reweight_features(query.positives(), ty, dims)?;
        debug!(positives = query.positives().len(), "mars reweighting");
        weighted_search(retriever, query, ty, weights, k)
    }

    fn name(&self) -> &'static str {
        "mars_gaussian"
    }
}

/// Like [`MarsGaussian`], but blends each new weight vector into the previous
/// one with mixing coefficient `1 / iteration`.
#[derive(Debug, Clone)]
pub struct MarsGaussianImproved {
    iteration: usize,
    last_weights: Option<Vec<f64>>,
}

impl Default for MarsGaussianImproved {
    fn default() -> Self {
        Self {
            iteration: 1,
            last_weights: None,
        }
    }
}

impl MarsGaussianImproved {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls completed so far plus one.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn last_weights(&self) -> Option<&[f64]> {
        self.last_weights.as_deref()
    }
}

impl IRelevanceFeedback for MarsGaussianImproved {
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
        let dims = query.values(ty)?.len();
        let mut weights = reweight_features(query.positives(), ty, dims)?;

        if let Some(last) = self.last_weights.as_ref().filter(|l| l.len() == weights.len()) {
            let mix = 1.0 / self.iteration as f64;
            for (w, old) in weights.iter_mut().zip(last) {
                *w = (1.0 - mix) * old + mix * *w;
            }
        }
        debug!(iteration = self.iteration, "blended mars reweighting");
        self.last_weights = Some(weights.clone());
        self.iteration += 1;

        weighted_search(retriever, query, ty, weights, k)
    }

    fn name(&self) -> &'static str {
        "mars_gaussian_improved"
    }
}
