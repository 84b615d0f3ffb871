use crate::errors::RefindResult;
use crate::item::{DescriptorType, Item};

/// Distance between two items over one descriptor type (lower = more similar).
///
/// Implementations must fail with `DescriptorUnavailable` when either item
/// lacks the descriptor, and return a documented neutral value instead of
/// NaN when a denominator degenerates.
pub trait IMetric: Send + Sync {
    fn distance(&self, a: &Item, b: &Item, ty: DescriptorType) -> RefindResult<f64>;

    /// Lower bound on the distance between two points whose coordinates on
    /// `axis` differ by `gap`, regardless of the other coordinates.
    ///
    /// Spatial search prunes a subtree when this bound exceeds the worst
    /// distance kept so far. Returning 0 disables pruning for the metric.
    fn axis_lower_bound(&self, gap: f64, _axis: usize, _ty: DescriptorType) -> f64 {
        gap.abs()
    }

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
