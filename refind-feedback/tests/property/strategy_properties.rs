//! Property tests for query adaptation and neighbor scores.

use std::sync::Arc;

use proptest::prelude::*;
use refind_core::{Descriptor, DescriptorType, IScore, Item};
use refind_feedback::{shift_query, NnScore, Rocchio};
use refind_metric::stats::centroid;
use refind_metric::Euclidean;

const TY: DescriptorType = DescriptorType::Cedd;

fn items(prefix: &str, vectors: &[Vec<f64>]) -> Vec<Arc<Item>> {
    vectors
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Arc::new(
                Item::with_descriptors(format!("{prefix}-{i}"), [Descriptor::new(TY, v.clone(), 1.0)])
                    .unwrap(),
            )
        })
        .collect()
}

prop_compose! {
    fn feedback(max: usize)(dims in 1usize..6)(
        query in prop::collection::vec(-50.0f64..50.0, dims),
        positives in prop::collection::vec(prop::collection::vec(-50.0f64..50.0, dims), 0..max),
        negatives in prop::collection::vec(prop::collection::vec(-50.0f64..50.0, dims), 0..max),
    ) -> (Vec<f64>, Vec<Vec<f64>>, Vec<Vec<f64>>) {
        (query, positives, negatives)
    }
}

proptest! {
    #[test]
    fn rocchio_identity_weights_keep_the_query((q, pos, neg) in feedback(6)) {
        let mut query = items("q", &[q.clone()]).remove(0).query_copy();
        query.record_feedback(&items("p", &pos), &items("n", &neg));
        Rocchio::new(1.0, 0.0, 0.0).unwrap().learn_query_vector(&mut query, TY).unwrap();
        prop_assert_eq!(query.values(TY).unwrap(), q.as_slice());
    }

    #[test]
    fn shift_without_negatives_lands_on_positive_centroid((q, pos, _neg) in feedback(6)) {
        prop_assume!(!pos.is_empty());
        let positives = items("p", &pos);
        let mut query = items("q", &[q.clone()]).remove(0).query_copy();
        query.record_feedback(&positives, &[]);
        shift_query(&mut query, TY).unwrap();
        let expected = centroid(&positives, TY, q.len()).unwrap();
        prop_assert_eq!(query.values(TY).unwrap(), expected.as_slice());
    }

    #[test]
    fn nn_score_is_a_fraction((q, pos, neg) in feedback(5), sample in prop::collection::vec(-50.0f64..50.0, 5)) {
        let mut query = items("q", &[q.clone()]).remove(0).query_copy();
        query.record_feedback(&items("p", &pos), &items("n", &neg));
        let candidate = items("c", &[sample[..q.len()].to_vec()]).remove(0);
        let s = NnScore::new(Arc::new(Euclidean)).score(&query, &candidate, TY).unwrap();
        prop_assert!((0.0..=1.0).contains(&s));
    }
}
