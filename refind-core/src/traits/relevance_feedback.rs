use std::sync::Arc;

use super::{IMetric, IRetriever};
use crate::errors::RefindResult;
use crate::item::{DescriptorType, Item};

/// One relevance-feedback strategy.
pub trait IRelevanceFeedback: Send {
    /// Run one feedback iteration.
    ///
    /// Merges `positives`/`negatives` into the query's feedback sets
    /// (deduplicated), adapts the query and/or the ranking, and returns up to
    /// `k` items. Strategies may rewrite the query's feature vector in place.
    #[allow(clippy::too_many_arguments)]
    fn iterate(
        &mut self,
        retriever: &dyn IRetriever,
        query: &mut Item,
        ty: DescriptorType,
        metric: &dyn IMetric,
        positives: &[Arc<Item>],
        negatives: &[Arc<Item>],
        k: usize,
    ) -> RefindResult<Vec<Arc<Item>>>;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}
