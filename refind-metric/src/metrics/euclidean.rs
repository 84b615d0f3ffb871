use refind_core::{DescriptorType, IMetric, Item, RefindResult};

use crate::vector::{paired, squared_distance};

/// Standard L2 distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl IMetric for Euclidean {
    fn distance(&self, a: &Item, b: &Item, ty: DescriptorType) -> RefindResult<f64> {
        let (va, vb) = paired(a, b, ty)?;
        Ok(squared_distance(va, vb).sqrt())
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}
