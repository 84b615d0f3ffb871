use std::sync::Arc;

use refind_core::{DescriptorType, IRetriever, IScore, Item, RefindResult};
use tracing::debug;

use crate::selection::{Rank, TopK};

/// Ranks the database by descending score. Always a linear scan, since
/// scores depend on the query's feedback state.
pub struct ScoreRetriever {
    database: Vec<Arc<Item>>,
    score: Arc<dyn IScore>,
}

impl ScoreRetriever {
    pub fn new(database: Vec<Arc<Item>>, score: Arc<dyn IScore>) -> Self {
        Self { database, score }
    }

    /// Up to `k` items with their scores, best first.
    pub fn ranked(
        &self,
        query: &Item,
        ty: DescriptorType,
        k: usize,
    ) -> RefindResult<Vec<(Arc<Item>, f64)>> {
        let mut top = TopK::new(k, Rank::Descending);
        for item in &self.database {
            top.offer(self.score.score(query, item, ty)?, item);
        }
        let ranked: Vec<(Arc<Item>, f64)> = top
            .into_sorted()
            .into_iter()
            .map(|(score, item)| (Arc::clone(item), score))
            .collect();
        debug!(
            descriptor = %ty,
            scanned = self.database.len(),
            returned = ranked.len(),
            "score search"
        );
        Ok(ranked)
    }
}

impl IRetriever for ScoreRetriever {
    fn search(&self, query: &Item, ty: DescriptorType, k: usize) -> RefindResult<Vec<Arc<Item>>> {
        Ok(self
            .ranked(query, ty, k)?
            .into_iter()
            .map(|(item, _)| item)
            .collect())
    }

    fn database(&self) -> &[Arc<Item>] {
        &self.database
    }
}
