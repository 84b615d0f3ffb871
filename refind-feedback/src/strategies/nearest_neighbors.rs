//! Re-ranking by a neighbor-distance score.

use std::sync::Arc;

use refind_core::{
    DescriptorType, IMetric, IRelevanceFeedback, IRetriever, IScore, Item, RefindResult,
};
use refind_retrieval::ScoreRetriever;
use tracing::debug;

/// Ranks by an [`IScore`] once both feedback sets are non-empty, and by the
/// plain retriever until then.
///
/// The score retriever is built over the first retriever's database on the
/// first call and reused afterwards.
pub struct NearestNeighbors {
    score: Arc<dyn IScore>,
    scorer: Option<ScoreRetriever>,
}

impl NearestNeighbors {
    pub fn new(score: Arc<dyn IScore>) -> Self {
        Self {
            score,
            scorer: None,
        }
    }
}

impl IRelevanceFeedback for NearestNeighbors {
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
        let score = &self.score;
        let scorer = self.scorer.get_or_insert_with(|| {
            ScoreRetriever::new(retriever.database().to_vec(), Arc::clone(score))
        });

        if !query.positives().is_empty() && !query.negatives().is_empty() {
            debug!(
                positives = query.positives().len(),
                negatives = query.negatives().len(),
                "score-based re-ranking"
            );
            scorer.search(query, ty, k)
        } else {
            retriever.search(query, ty, k)
        }
    }

    fn name(&self) -> &'static str {
        "nearest_neighbors"
    }
}
