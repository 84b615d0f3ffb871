use refind_core::{DescriptorType, IMetric, Item, RefindResult};

use crate::vector::paired;

/// Square root of the L1 distance.
///
/// Monotone in the plain L1 distance, so rankings are unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl IMetric for Manhattan {
    fn distance(&self, a: &Item, b: &Item, ty: DescriptorType) -> RefindResult<f64> {
        let (va, vb) = paired(a, b, ty)?;
        Ok(va.iter().zip(vb).map(|(x, y)| (x - y).abs()).sum::<f64>().sqrt())
    }

    fn axis_lower_bound(&self, gap: f64, _axis: usize, _ty: DescriptorType) -> f64 {
        gap.abs().sqrt()
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}
