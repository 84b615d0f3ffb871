use refind_core::{DescriptorType, IMetric, Item, RefindResult};

use crate::vector::{check_weights, paired};
use crate::weights::LazyWeights;

/// `sqrt(sum w_i * (a_i - b_i)^2)`.
///
/// Weights are either fixed up front or derived from the first `a` operand
/// via [`balanced_weights`](crate::weights::balanced_weights).
#[derive(Debug, Default)]
pub struct WeightedEuclidean {
    weights: LazyWeights,
}

impl WeightedEuclidean {
    /// Weights derived lazily on the first distance call.
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

impl IMetric for WeightedEuclidean {
    fn distance(&self, a: &Item, b: &Item, ty: DescriptorType) -> RefindResult<f64> {
        let (va, vb) = paired(a, b, ty)?;
        let w = self.weights.get_or_init(a, ty)?;
        check_weights(&w, va.len())?;
        let sum: f64 = va
            .iter()
            .zip(vb)
            .zip(w.iter())
            .map(|((x, y), w)| w * (x - y) * (x - y))
            .sum();
        Ok(sum.sqrt())
    }

    fn axis_lower_bound(&self, gap: f64, axis: usize, _ty: DescriptorType) -> f64 {
        match self.weights.at(axis) {
            Some(w) if w > 0.0 => w.sqrt() * gap.abs(),
            _ => 0.0,
        }
    }

    fn name(&self) -> &'static str {
        "weighted_euclidean"
    }
}
