use crate::errors::RefindResult;
use crate::item::{DescriptorType, Item};

/// Relevance of a candidate with respect to a query and its accumulated
/// feedback sets (higher = more relevant).
pub trait IScore: Send + Sync {
    fn score(&self, query: &Item, candidate: &Item, ty: DescriptorType) -> RefindResult<f64>;
}
