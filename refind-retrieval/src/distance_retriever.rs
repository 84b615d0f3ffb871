use std::collections::HashMap;
use std::sync::Arc;

use refind_core::{DescriptorType, IMetric, IRetriever, Item, RefindResult};
use refind_index::KdTree;
use tracing::{debug, info};

use crate::selection::{Rank, TopK};

/// Ranks the database by ascending distance under one metric.
///
/// Holds a k-d tree for each configured descriptor type; any other type is
/// answered by a linear scan with the same result.
pub struct DistanceRetriever {
    database: Vec<Arc<Item>>,
    metric: Arc<dyn IMetric>,
    indexes: HashMap<DescriptorType, KdTree>,
}

impl DistanceRetriever {
    /// Build a k-d tree per entry of `indexed_types`, splitting on the full
    /// descriptor length of the first database item.
    pub fn new(
        database: Vec<Arc<Item>>,
        metric: Arc<dyn IMetric>,
        indexed_types: &[DescriptorType],
    ) -> RefindResult<Self> {
        let mut indexes = HashMap::new();
        if let Some(first) = database.first() {
            for ty in indexed_types {
                let k = first.values(*ty)?.len();
                let tree = KdTree::build(database.clone(), k, *ty)?;
                indexes.insert(*ty, tree);
            }
        }
        info!(
            metric = metric.name(),
            items = database.len(),
            indexed = indexes.len(),
            "distance retriever ready"
        );
        Ok(Self {
            database,
            metric,
            indexes,
        })
    }

    /// A retriever that always scans linearly.
    pub fn linear(database: Vec<Arc<Item>>, metric: Arc<dyn IMetric>) -> Self {
        Self {
            database,
            metric,
            indexes: HashMap::new(),
        }
    }

    pub fn metric(&self) -> &Arc<dyn IMetric> {
        &self.metric
    }

    pub fn index(&self, ty: DescriptorType) -> Option<&KdTree> {
        self.indexes.get(&ty)
    }

    pub fn is_indexed(&self, ty: DescriptorType) -> bool {
        self.indexes.contains_key(&ty)
    }
}

impl IRetriever for DistanceRetriever {
    fn search(&self, query: &Item, ty: DescriptorType, k: usize) -> RefindResult<Vec<Arc<Item>>> {
        if let Some(tree) = self.indexes.get(&ty) {
            return tree.search_knn(query, k, self.metric.as_ref(), ty);
        }

        let mut top = TopK::new(k, Rank::Ascending);
        for item in &self.database {
            top.offer(self.metric.distance(item, query, ty)?, item);
        }
        let ranked: Vec<Arc<Item>> = top
            .into_sorted()
            .into_iter()
            .map(|(_, item)| Arc::clone(item))
            .collect();
        debug!(
            metric = self.metric.name(),
            descriptor = %ty,
            scanned = self.database.len(),
            returned = ranked.len(),
            "linear search"
        );
        Ok(ranked)
    }

    fn database(&self) -> &[Arc<Item>] {
        &self.database
    }
}
