//! Property tests for the metric implementations.

use proptest::prelude::*;
use refind_core::{Descriptor, DescriptorType, IMetric, Item};
use refind_metric::{Cosine, Euclidean, Manhattan, WeightedCosine, WeightedEuclidean};

fn item(id: &str, values: Vec<f64>) -> Item {
    Item::with_descriptors(id, [Descriptor::new(DescriptorType::Cedd, values, 1.0)]).unwrap()
}

fn pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(-100.0f64..100.0, n),
            prop::collection::vec(-100.0f64..100.0, n),
        )
    })
}

fn metrics() -> Vec<Box<dyn IMetric>> {
    vec![
        Box::new(Euclidean),
        Box::new(Manhattan),
        Box::new(WeightedEuclidean::new()),
    ]
}

proptest! {
    #[test]
    fn distances_are_symmetric_and_non_negative((a, b) in pair()) {
        let (a, b) = (item("a", a), item("b", b));
        for metric in metrics() {
            let ab = metric.distance(&a, &b, DescriptorType::Cedd).unwrap();
            let ba = metric.distance(&b, &a, DescriptorType::Cedd).unwrap();
            prop_assert!(ab >= 0.0, "{} gave {}", metric.name(), ab);
            prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0));
        }
    }

    #[test]
    fn self_distance_is_zero((a, _b) in pair()) {
        let a = item("a", a);
        for metric in metrics() {
            prop_assert_eq!(metric.distance(&a, &a, DescriptorType::Cedd).unwrap(), 0.0);
        }
    }

    #[test]
    fn axis_bound_never_exceeds_distance((a, b) in pair(), axis_seed in any::<usize>()) {
        let axis = axis_seed % a.len();
        let gap = a[axis] - b[axis];
        let (a, b) = (item("a", a), item("b", b));
        let weighted = WeightedEuclidean::with_weights(vec![2.0; a.values(DescriptorType::Cedd).unwrap().len()]);
        let all: Vec<&dyn IMetric> = vec![&Euclidean, &Manhattan, &weighted, &Cosine];
        for metric in all {
            let d = metric.distance(&a, &b, DescriptorType::Cedd).unwrap();
            let bound = metric.axis_lower_bound(gap, axis, DescriptorType::Cedd);
            if metric.name() != "cosine" {
                prop_assert!(bound <= d + 1e-9, "{}: bound {} > distance {}", metric.name(), bound, d);
            } else {
                prop_assert_eq!(bound, 0.0);
            }
        }
    }

    #[test]
    fn weighted_cosine_stays_in_range((a, b) in pair()) {
        let (a, b) = (item("a", a), item("b", b));
        let d = WeightedCosine::new().distance(&a, &b, DescriptorType::Cedd).unwrap();
        prop_assert!((-1e-9..=2.0 + 1e-9).contains(&d));
    }
}

#[test]
fn missing_descriptor_is_reported() {
    let a = item("a", vec![1.0]);
    let b = Item::with_descriptors("b", [Descriptor::new(DescriptorType::MpegEhd, vec![1.0], 1.0)]).unwrap();
    let err = Euclidean.distance(&a, &b, DescriptorType::Cedd).unwrap_err();
    assert!(matches!(err, refind_core::RefindError::DescriptorUnavailable { .. }));
}
