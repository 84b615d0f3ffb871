//! Per-feature statistics over a set of items.
//!
//! Every function checks that the vectors it reads share one length and
//! fails with `DimensionMismatch` otherwise.

use refind_core::{DescriptorType, Item, RefindError, RefindResult};

fn checked<'a>(item: &'a Item, ty: DescriptorType, len: usize) -> RefindResult<&'a [f64]> {
    let values = item.values(ty)?;
    if values.len() != len {
        return Err(RefindError::DimensionMismatch {
            expected: len,
            actual: values.len(),
        });
    }
    Ok(values)
}

/// Per-feature mean. An empty set yields an empty vector.
pub fn means<I: AsRef<Item>>(items: &[I], ty: DescriptorType) -> RefindResult<Vec<f64>> {
    let Some(first) = items.first() else {
        return Ok(Vec::new());
    };
    let dims = first.as_ref().values(ty)?.len();
    centroid(items, ty, dims)
}

/// Per-feature mean of vectors with `dims` features. An empty set yields the
/// zero vector.
pub fn centroid<I: AsRef<Item>>(
    items: &[I],
    ty: DescriptorType,
    dims: usize,
) -> RefindResult<Vec<f64>> {
    let mut sum = vec![0.0; dims];
    for item in items {
        for (acc, v) in sum.iter_mut().zip(checked(item.as_ref(), ty, dims)?) {
            *acc += v;
        }
    }
    if !items.is_empty() {
        let n = items.len() as f64;
        sum.iter_mut().for_each(|x| *x /= n);
    }
    Ok(sum)
}

/// Per-feature population variance around `means`.
pub fn variances<I: AsRef<Item>>(
    items: &[I],
    ty: DescriptorType,
    means: &[f64],
) -> RefindResult<Vec<f64>> {
    let mut acc = vec![0.0; means.len()];
    for item in items {
        let values = checked(item.as_ref(), ty, means.len())?;
        for ((a, v), m) in acc.iter_mut().zip(values).zip(means) {
            *a += (v - m) * (v - m);
        }
    }
    if !items.is_empty() {
        let n = items.len() as f64;
        acc.iter_mut().for_each(|x| *x /= n);
    }
    Ok(acc)
}

/// Per-feature population standard deviation around `means`.
pub fn deviations<I: AsRef<Item>>(
    items: &[I],
    ty: DescriptorType,
    means: &[f64],
) -> RefindResult<Vec<f64>> {
    let mut v = variances(items, ty, means)?;
    v.iter_mut().for_each(|x| *x = x.sqrt());
    Ok(v)
}

/// Sample dispersion around `center`: `sum ||x - center||^2 / (n - 1)`,
/// or 0 for fewer than two items.
pub fn dispersion<I: AsRef<Item>>(
    items: &[I],
    ty: DescriptorType,
    center: &[f64],
) -> RefindResult<f64> {
    if items.len() < 2 {
        return Ok(0.0);
    }
    let mut total = 0.0;
    for item in items {
        let values = checked(item.as_ref(), ty, center.len())?;
        total += crate::vector::squared_distance(values, center);
    }
    Ok(total / (items.len() - 1) as f64)
}
