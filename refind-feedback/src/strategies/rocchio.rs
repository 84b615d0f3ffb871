//! Rocchio-style linear recombination ("MARS IDF").

use std::sync::Arc;

use refind_core::config::defaults::{
    DEFAULT_ROCCHIO_NEGATIVES, DEFAULT_ROCCHIO_POSITIVES, DEFAULT_ROCCHIO_QUERY,
};
use refind_core::config::FeedbackConfig;
use refind_core::errors::FeedbackError;
use refind_core::{DescriptorType, IMetric, IRelevanceFeedback, IRetriever, Item, RefindResult};
use refind_metric::stats::centroid;
use tracing::debug;

/// `moved = a * query + b * mean(positives) - c * mean(negatives)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rocchio {
    query_weight: f64,
    positive_weight: f64,
    negative_weight: f64,
}

impl Default for Rocchio {
    fn default() -> Self {
        Self {
            query_weight: DEFAULT_ROCCHIO_QUERY,
            positive_weight: DEFAULT_ROCCHIO_POSITIVES,
            negative_weight: DEFAULT_ROCCHIO_NEGATIVES,
        }
    }
}

impl Rocchio {
    pub fn new(a: f64, b: f64, c: f64) -> RefindResult<Self> {
        if ![a, b, c].iter().all(|w| w.is_finite()) {
            return Err(FeedbackError::InvalidWeights {
                reason: format!("rocchio weights must be finite, got ({a}, {b}, {c})"),
            }
            .into());
        }
        Ok(Self {
            query_weight: a,
            positive_weight: b,
            negative_weight: c,
        })
    }

    pub fn from_config(config: &FeedbackConfig) -> RefindResult<Self> {
        Self::new(
            config.rocchio_query,
            config.rocchio_positives,
            config.rocchio_negatives,
        )
    }

    pub fn weights(&self) -> (f64, f64, f64) {
        (self.query_weight, self.positive_weight, self.negative_weight)
    }

    /// Rewrite the query's `ty` vector from its accumulated feedback sets.
    /// An empty set contributes a zero mean.
    pub fn learn_query_vector(&self, query: &mut Item, ty: DescriptorType) -> RefindResult<()> {
        let current = query.values(ty)?;
        let dims = current.len();
        let mean_positives = centroid(query.positives(), ty, dims)?;
        let mean_negatives = centroid(query.negatives(), ty, dims)?;

        let moved: Vec<f64> = current
            .iter()
            .zip(&mean_positives)
            .zip(&mean_negatives)
            .map(|((q, p), n)| {
                self.query_weight * q + self.positive_weight * p - self.negative_weight * n
            })
            .collect();
        debug!(
            positives = query.positives().len(),
            negatives = query.negatives().len(),
            "rocchio query update"
        );
        query.replace_values(ty, moved)
    }
}

impl IRelevanceFeedback for Rocchio {
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
        self.learn_query_vector(query, ty)?;
        retriever.search(query, ty, k)
    }

    fn name(&self) -> &'static str {
        "rocchio"
    }
}
