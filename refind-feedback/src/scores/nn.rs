use std::sync::Arc;

use refind_core::{DescriptorType, IMetric, IScore, Item, RefindResult};
use tracing::warn;

use super::neighbor_distances;

/// `dN / (dN + dR)`: near a positive and far from any negative scores high.
///
/// 0 when either feedback set is empty or both distances are 0.
pub struct NnScore {
    metric: Arc<dyn IMetric>,
}

impl NnScore {
    pub fn new(metric: Arc<dyn IMetric>) -> Self {
        Self { metric }
    }

    /// Base score together with the two neighbor distances.
    pub(crate) fn components(
        &self,
        query: &Item,
        candidate: &Item,
        ty: DescriptorType,
    ) -> RefindResult<Option<(f64, f64, f64)>> {
        let Some((d_r, d_n)) = neighbor_distances(self.metric.as_ref(), query, candidate, ty)?
        else {
            return Ok(None);
        };
        if d_n + d_r == 0.0 {
            warn!(candidate = candidate.id(), "candidate coincides with both nearest neighbors");
            return Ok(Some((0.0, d_r, d_n)));
        }
        Ok(Some((d_n / (d_n + d_r), d_r, d_n)))
    }
}

impl IScore for NnScore {
    fn score(&self, query: &Item, candidate: &Item, ty: DescriptorType) -> RefindResult<f64> {
        Ok(self
            .components(query, candidate, ty)?
            .map_or(0.0, |(score, _, _)| score))
    }
}
