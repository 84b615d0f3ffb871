//! Whole-database feature normalization, applied before indexing.

use refind_core::config::{IndexConfig, Normalization};
use refind_core::{DescriptorType, Item, RefindResult};
use tracing::debug;

use crate::stats::{deviations, means, variances};

/// Normalize every item's `ty` vector in place, feature by feature.
///
/// A feature with zero spread is set to 1 on every item. Merged and
/// component vectors stay consistent because the rewrite goes through
/// [`Item::replace_values`].
pub fn normalize_database(
    items: &mut [Item],
    ty: DescriptorType,
    mode: Normalization,
) -> RefindResult<()> {
    if mode == Normalization::None || items.is_empty() {
        return Ok(());
    }

    let snapshot: &[Item] = items;
    let mean = means(snapshot, ty)?;
    let spread = match mode {
        Normalization::Variance => variances(snapshot, ty, &mean)?,
        _ => deviations(snapshot, ty, &mean)?
            .into_iter()
            .map(|s| 3.0 * s)
            .collect(),
    };
    let shift_to_unit = mode == Normalization::GaussianUnit;

    for item in items.iter_mut() {
        let normalized: Vec<f64> = item
            .values(ty)?
            .iter()
            .zip(&mean)
            .zip(&spread)
            .map(|((x, m), s)| {
                if *s == 0.0 {
                    return 1.0;
                }
                let z = (x - m) / s;
                if shift_to_unit {
                    (z + 1.0) / 2.0
                } else {
                    z
                }
            })
            .collect();
        item.replace_values(ty, normalized)?;
    }

    debug!(?mode, descriptor = %ty, items = items.len(), "normalized database");
    Ok(())
}

/// Apply the configured normalization to every configured descriptor type.
pub fn normalize_configured(items: &mut [Item], config: &IndexConfig) -> RefindResult<()> {
    for ty in &config.normalized_types {
        normalize_database(items, *ty, config.normalization)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use refind_core::Descriptor;

    fn db(rows: &[[f64; 2]]) -> Vec<Item> {
        rows.iter()
            .enumerate()
            .map(|(i, r)| {
                Item::with_descriptors(
                    format!("i{i}"),
                    [Descriptor::new(DescriptorType::ColorHisto, r.to_vec(), 1.0)],
                )
                .unwrap()
            })
            .collect()
    }

    fn column(items: &[Item], ty: DescriptorType, f: usize) -> Vec<f64> {
        items.iter().map(|i| i.values(ty).unwrap()[f]).collect()
    }

    #[test]
    fn gaussian_scales_by_three_sigma() {
        let mut items = db(&[[1.0, 5.0], [3.0, 5.0]]);
        normalize_database(&mut items, DescriptorType::ColorHisto, Normalization::Gaussian).unwrap();
        let first = column(&items, DescriptorType::ColorHisto, 0);
        assert!((first[0] + 1.0 / 3.0).abs() < 1e-12);
        assert!((first[1] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(column(&items, DescriptorType::ColorHisto, 1), vec![1.0, 1.0]);
    }

    #[test]
    fn gaussian_unit_shifts_into_unit_range() {
        let mut items = db(&[[1.0, 0.0], [3.0, 0.0]]);
        normalize_database(&mut items, DescriptorType::ColorHisto, Normalization::GaussianUnit)
            .unwrap();
        let first = column(&items, DescriptorType::ColorHisto, 0);
        assert!((first[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((first[1] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn variance_divides_by_variance() {
        let mut items = db(&[[0.0, 0.0], [4.0, 0.0]]);
        normalize_database(&mut items, DescriptorType::ColorHisto, Normalization::Variance).unwrap();
        assert_eq!(column(&items, DescriptorType::ColorHisto, 0), vec![-0.5, 0.5]);
    }

    #[test]
    fn merged_vector_follows_component() {
        let mut items = db(&[[1.0, 5.0], [3.0, 7.0]]);
        normalize_database(&mut items, DescriptorType::ColorHisto, Normalization::Variance).unwrap();
        for item in &items {
            assert_eq!(
                item.values(DescriptorType::Merged).unwrap(),
                item.values(DescriptorType::ColorHisto).unwrap()
            );
        }
    }

    #[test]
    fn none_leaves_values_alone() {
        let mut items = db(&[[1.0, 5.0]]);
        normalize_database(&mut items, DescriptorType::ColorHisto, Normalization::None).unwrap();
        assert_eq!(items[0].values(DescriptorType::ColorHisto).unwrap(), &[1.0, 5.0]);
    }
}
