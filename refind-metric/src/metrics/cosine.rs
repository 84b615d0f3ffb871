use refind_core::constants::COSINE_EPSILON;
use refind_core::{DescriptorType, IMetric, Item, RefindResult};

use crate::vector::{norm, paired, scalar_product};

/// Inverse cosine similarity, `1 / (sim + epsilon)`.
///
/// Meant for non-negative feature vectors such as histograms. A zero-norm
/// vector has similarity 0 to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

pub(crate) fn similarity(a: &[f64], b: &[f64]) -> f64 {
    let denominator = norm(a) * norm(b);
    if denominator == 0.0 {
        return 0.0;
    }
    scalar_product(a, b) / denominator
}

impl IMetric for Cosine {
    fn distance(&self, a: &Item, b: &Item, ty: DescriptorType) -> RefindResult<f64> {
        let (va, vb) = paired(a, b, ty)?;
        Ok(1.0 / (similarity(va, vb) + COSINE_EPSILON))
    }

    // Angular distance has no per-axis bound.
    fn axis_lower_bound(&self, _gap: f64, _axis: usize, _ty: DescriptorType) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}
