//! Plain vector arithmetic over `f64` slices.

use refind_core::{DescriptorType, Item, RefindError, RefindResult};

pub fn scalar_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub fn weighted_scalar_product(a: &[f64], b: &[f64], weights: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .zip(weights)
        .map(|((x, y), w)| w * x * y)
        .sum()
}

/// Euclidean norm.
pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

pub fn weighted_norm(a: &[f64], weights: &[f64]) -> f64 {
    a.iter()
        .zip(weights)
        .map(|(x, w)| w * x * x)
        .sum::<f64>()
        .sqrt()
}

pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// The descriptor vectors of `ty` on both items, which must have equal length.
pub fn paired<'a>(
    a: &'a Item,
    b: &'a Item,
    ty: DescriptorType,
) -> RefindResult<(&'a [f64], &'a [f64])> {
    let va = a.values(ty)?;
    let vb = b.values(ty)?;
    if va.len() != vb.len() {
        return Err(RefindError::DimensionMismatch {
            expected: va.len(),
            actual: vb.len(),
        });
    }
    Ok((va, vb))
}

/// Check that a weight vector fits a descriptor vector.
pub fn check_weights(weights: &[f64], len: usize) -> RefindResult<()> {
    if weights.len() != len {
        return Err(RefindError::DimensionMismatch {
            expected: len,
            actual: weights.len(),
        });
    }
    Ok(())
}
