//! Property tests: brute-force equivalence, self-identity, deletion effect.

use std::sync::Arc;

use proptest::prelude::*;
use refind_core::{Descriptor, DescriptorType, IMetric, Item};
use refind_index::KdTree;
use refind_metric::{Cosine, Euclidean, Manhattan, WeightedEuclidean};

const TY: DescriptorType = DescriptorType::Cedd;

fn database(points: &[Vec<f64>]) -> Vec<Arc<Item>> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Arc::new(
                Item::with_descriptors(format!("item-{i}"), [Descriptor::new(TY, p.clone(), 1.0)])
                    .unwrap(),
            )
        })
        .collect()
}

fn brute_force(db: &[Arc<Item>], query: &Item, num: usize, metric: &dyn IMetric) -> Vec<f64> {
    let mut distances: Vec<f64> = db
        .iter()
        .map(|item| metric.distance(item, query, TY).unwrap())
        .collect();
    distances.sort_by(|a, b| a.total_cmp(b));
    distances.truncate(num);
    distances
}

fn scenario() -> impl Strategy<Value = (usize, Vec<Vec<f64>>, Vec<f64>, usize)> {
    (1usize..5).prop_flat_map(|dims| {
        (
            Just(dims),
            prop::collection::vec(prop::collection::vec(0.0f64..100.0, dims), 1..60),
            prop::collection::vec(0.0f64..100.0, dims),
            1usize..12,
        )
    })
}

fn close(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= 1e-9 * x.abs().max(1.0))
}

proptest! {
    #[test]
    fn knn_matches_brute_force((dims, points, query, num) in scenario()) {
        let db = database(&points);
        let query = database(&[query]).remove(0);
        let weighted = WeightedEuclidean::new();
        let metrics: Vec<&dyn IMetric> = vec![&Euclidean, &Manhattan, &Cosine, &weighted];
        let tree = KdTree::build(db.clone(), dims, TY).unwrap();

        for metric in metrics {
            let found: Vec<f64> = tree
                .nearest(&query, num, metric, TY)
                .unwrap()
                .into_iter()
                .map(|(_, d)| d)
                .collect();
            let expected = brute_force(&db, &query, num, metric);
            prop_assert!(close(&found, &expected), "{}: {:?} vs {:?}", metric.name(), found, expected);
        }
    }

    #[test]
    fn inserted_item_is_its_own_nearest((dims, points, sample, _num) in scenario()) {
        let mut tree = KdTree::build(database(&points), dims, TY).unwrap();
        let sample = Arc::new(
            Item::with_descriptors("sample", [Descriptor::new(TY, sample, 1.0)]).unwrap(),
        );
        tree.insert(Arc::clone(&sample)).unwrap();

        let ranked = tree.nearest(&sample, tree.len(), &Euclidean, TY).unwrap();
        prop_assert_eq!(ranked[0].1, 0.0);
        prop_assert!(ranked
            .iter()
            .take_while(|(_, d)| *d == 0.0)
            .any(|(item, _)| item.id() == "sample"));
    }

    #[test]
    fn removed_item_is_gone((dims, points, _query, _num) in scenario(), pick in any::<prop::sample::Index>()) {
        let db = database(&points);
        let victim = Arc::clone(&db[pick.index(db.len())]);
        prop_assume!(db
            .iter()
            .filter(|other| other.id() != victim.id())
            .all(|other| {
                let a = other.values(TY).unwrap();
                let b = victim.values(TY).unwrap();
                a.iter().zip(b).all(|(x, y)| x != y)
            }));

        let mut tree = KdTree::build(db.clone(), dims, TY).unwrap();
        prop_assert!(tree.remove(&victim).unwrap());
        prop_assert!(!tree.contains(&victim).unwrap());
        prop_assert_eq!(tree.len(), db.len() - 1);

        let remaining = tree.search_knn(&victim, db.len(), &Euclidean, TY).unwrap();
        prop_assert_eq!(remaining.len(), db.len() - 1);
        prop_assert!(remaining.iter().all(|item| item.id() != victim.id()));
    }
}
