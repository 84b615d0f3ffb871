use refind_core::{DescriptorType, IMetric, Item, RefindResult};

use crate::vector::{check_weights, paired, weighted_norm, weighted_scalar_product};
use crate::weights::LazyWeights;

/// `1 - weighted cosine similarity`. A zero weighted norm gives similarity 0.
#[derive(Debug, Default)]
pub struct WeightedCosine {
    weights: LazyWeights,
}

impl WeightedCosine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: Vec<f64>) -> Self {
        Self {
            weights: LazyWeights::fixed(weights),
        }
    }

    pub fn weights(&self) -> &LazyWeights {
        &self.weights
    }
}

impl IMetric for WeightedCosine {
    fn distance(&self, a: &Item, b: &Item, ty: DescriptorType) -> RefindResult<f64> {
        let (va, vb) = paired(a, b, ty)?;
        let w = self.weights.get_or_init(a, ty)?;
        check_weights(&w, va.len())?;
        let denominator = weighted_norm(va, &w) * weighted_norm(vb, &w);
        let similarity = if denominator == 0.0 {
            0.0
        } else {
            weighted_scalar_product(va, vb, &w) / denominator
        };
        Ok(1.0 - similarity)
    }

    fn axis_lower_bound(&self, _gap: f64, _axis: usize, _ty: DescriptorType) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "weighted_cosine"
    }
}
