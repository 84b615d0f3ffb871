//! Descriptor-balanced weights and the lazily initialized weight cache used
//! by the weighted metrics.

use std::sync::{Arc, Mutex};

use refind_core::{DescriptorType, Item, RefindError, RefindResult};
use tracing::debug;

/// Weights that make every component of a merged vector contribute equally,
/// regardless of its length.
///
/// For `C` components with total length `N`, every feature of a component of
/// length `L` gets `(1 / L) * (N / C)`. Any other descriptor type gets all
/// ones.
pub fn balanced_weights(sample: &Item, ty: DescriptorType) -> RefindResult<Vec<f64>> {
    let len = sample.values(ty)?.len();
    if !ty.is_merged() {
        return Ok(vec![1.0; len]);
    }

    let segments = sample.segments()?;
    let components = segments.len() as f64;
    let mut weights = vec![1.0; len];
    for (_, range) in segments {
        let w = (1.0 / range.len() as f64) * (len as f64 / components);
        weights[range].iter_mut().for_each(|x| *x = w);
    }
    Ok(weights)
}

/// A weight vector fixed at construction or derived from the first item a
/// metric sees.
///
/// Once initialized the weights never change. Concurrent first calls
/// serialize on the mutex so exactly one initialization happens.
#[derive(Debug, Default)]
pub struct LazyWeights {
    slot: Mutex<Option<Arc<[f64]>>>,
}

impl LazyWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixed(weights: Vec<f64>) -> Self {
        Self {
            slot: Mutex::new(Some(weights.into())),
        }
    }

    /// Current weights, if already initialized.
    pub fn get(&self) -> RefindResult<Option<Arc<[f64]>>> {
        let guard = self.slot.lock().map_err(|e| RefindError::LockPoisoned {
            resource: format!("metric weights: {e}"),
        })?;
        Ok(guard.clone())
    }

    /// Current weights, initializing them from `sample` on first use.
    pub fn get_or_init(&self, sample: &Item, ty: DescriptorType) -> RefindResult<Arc<[f64]>> {
        let mut guard = self.slot.lock().map_err(|e| RefindError::LockPoisoned {
            resource: format!("metric weights: {e}"),
        })?;
        if let Some(weights) = guard.as_ref() {
            return Ok(Arc::clone(weights));
        }
        let weights: Arc<[f64]> = balanced_weights(sample, ty)?.into();
        debug!(
            descriptor = %ty,
            features = weights.len(),
            item = sample.id(),
            "initialized metric weights"
        );
        *guard = Some(Arc::clone(&weights));
        Ok(weights)
    }

    /// Weight of one feature, or `None` while uninitialized.
    pub fn at(&self, axis: usize) -> Option<f64> {
        self.slot
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().and_then(|w| w.get(axis).copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refind_core::Descriptor;

    fn merged_item(lens: &[(DescriptorType, usize)]) -> Item {
        Item::with_descriptors(
            "q",
            lens.iter()
                .map(|(ty, n)| Descriptor::new(*ty, vec![0.5; *n], 1.0)),
        )
        .unwrap()
    }

    #[test]
    fn merged_components_are_balanced() {
        let item = merged_item(&[(DescriptorType::Cedd, 3), (DescriptorType::MpegEhd, 5)]);
        let w = balanced_weights(&item, DescriptorType::Merged).unwrap();
        assert_eq!(w.len(), 8);
        for x in &w[..3] {
            assert!((x - 4.0 / 3.0).abs() < 1e-12);
        }
        for x in &w[3..] {
            assert!((x - 4.0 / 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn single_component_types_get_unit_weights() {
        let item = merged_item(&[(DescriptorType::Cedd, 3), (DescriptorType::MpegEhd, 5)]);
        assert_eq!(balanced_weights(&item, DescriptorType::Cedd).unwrap(), vec![1.0; 3]);
    }

    #[test]
    fn lazy_weights_initialize_once() {
        let lazy = LazyWeights::new();
        assert!(lazy.get().unwrap().is_none());
        assert_eq!(lazy.at(0), None);

        let a = merged_item(&[(DescriptorType::Cedd, 2)]);
        let first = lazy.get_or_init(&a, DescriptorType::Merged).unwrap();
        let b = merged_item(&[(DescriptorType::Cedd, 1), (DescriptorType::MpegEhd, 1)]);
        let second = lazy.get_or_init(&b, DescriptorType::Merged).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(lazy.at(1), Some(1.0));
    }
}
