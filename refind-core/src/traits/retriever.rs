use std::sync::Arc;

use crate::errors::RefindResult;
use crate::item::{DescriptorType, Item};

/// Top-k search over a fixed in-memory database.
pub trait IRetriever: Send + Sync {
    /// Up to `k` database items ranked best-first for `query`.
    /// The list is shorter than `k` when the database is.
    fn search(&self, query: &Item, ty: DescriptorType, k: usize) -> RefindResult<Vec<Arc<Item>>>;

    /// The database this retriever ranks.
    fn database(&self) -> &[Arc<Item>];

    /// Database item with the given id, if any.
    fn get_by_name(&self, name: &str) -> Option<Arc<Item>> {
        self.database().iter().find(|i| i.id() == name).cloned()
    }
}
