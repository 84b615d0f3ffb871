use std::sync::Arc;

use refind_core::{DescriptorType, IMetric, IScore, Item, RefindResult};

use super::NnScore;

/// NN score dampened by `1 - min(dR, dN)`, discounting candidates sitting in
/// a crowded neighborhood.
pub struct NnRegularizedScore {
    nn: NnScore,
}

impl NnRegularizedScore {
    pub fn new(metric: Arc<dyn IMetric>) -> Self {
        Self {
            nn: NnScore::new(metric),
        }
    }
}

impl IScore for NnRegularizedScore {
    fn score(&self, query: &Item, candidate: &Item, ty: DescriptorType) -> RefindResult<f64> {
        Ok(self
            .nn
            .components(query, candidate, ty)?
            .map_or(0.0, |(base, d_r, d_n)| (1.0 - d_r.min(d_n)) * base))
    }
}
