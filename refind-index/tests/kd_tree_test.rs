//! Integration tests for the k-d tree.

use std::collections::HashSet;
use std::sync::Arc;

use refind_core::{Descriptor, DescriptorType, Item, RefindError};
use refind_index::KdTree;
use refind_metric::{Cosine, Euclidean, Manhattan};

fn histo_item(id: &str, values: &[f64]) -> Arc<Item> {
    Arc::new(
        Item::with_descriptors(
            id,
            [Descriptor::new(DescriptorType::ColorHisto, values.to_vec(), 1.0)],
        )
        .unwrap(),
    )
}

fn five_point_database() -> Vec<Arc<Item>> {
    vec![
        histo_item("origin", &[0.0, 0.0]),
        histo_item("east", &[1.0, 0.0]),
        histo_item("north", &[0.0, 1.0]),
        histo_item("far", &[5.0, 5.0]),
        histo_item("farther", &[6.0, 6.0]),
    ]
}

fn ids(items: &[Arc<Item>]) -> HashSet<String> {
    items.iter().map(|i| i.id().to_string()).collect()
}

#[test]
fn five_point_scenario_on_merged_descriptor() {
    let db = five_point_database();
    let mut tree = KdTree::build(db.clone(), 2, DescriptorType::Merged).unwrap();
    let query = db[0].query_copy();

    let top3 = tree
        .nearest(&query, 3, &Euclidean, DescriptorType::Merged)
        .unwrap();
    assert_eq!(top3[0].0.id(), "origin");
    assert_eq!(top3[0].1, 0.0);
    assert_eq!(top3[1].1, 1.0);
    assert_eq!(top3[2].1, 1.0);

    // With the query's own entry gone, the two unit-distance items remain.
    assert!(tree.remove(&db[0]).unwrap());
    let top2 = tree
        .search_knn(&query, 2, &Euclidean, DescriptorType::Merged)
        .unwrap();
    let expected: HashSet<String> = ["east", "north"].iter().map(|s| s.to_string()).collect();
    assert_eq!(ids(&top2), expected);
}

#[test]
fn empty_tree_returns_nothing() {
    let tree = KdTree::new(2, DescriptorType::ColorHisto).unwrap();
    let query = histo_item("q", &[0.0, 0.0]);
    assert!(tree
        .search_knn(&query, 5, &Euclidean, DescriptorType::ColorHisto)
        .unwrap()
        .is_empty());
    assert!(!tree.contains(&query).unwrap());
}

#[test]
fn short_result_when_tree_is_small() {
    let tree = KdTree::build(five_point_database(), 2, DescriptorType::ColorHisto).unwrap();
    let query = histo_item("q", &[2.0, 2.0]);
    let all = tree
        .search_knn(&query, 50, &Manhattan, DescriptorType::ColorHisto)
        .unwrap();
    assert_eq!(all.len(), 5);
}

#[test]
fn results_are_sorted_ascending() {
    let tree = KdTree::build(five_point_database(), 2, DescriptorType::ColorHisto).unwrap();
    let query = histo_item("q", &[5.2, 5.1]);
    let ranked = tree
        .nearest(&query, 5, &Euclidean, DescriptorType::ColorHisto)
        .unwrap();
    assert_eq!(ranked[0].0.id(), "far");
    assert!(ranked.windows(2).all(|w| w[0].1 <= w[1].1));
}

#[test]
fn cosine_search_visits_everything_it_needs() {
    let db: Vec<_> = (1..=20)
        .map(|i| histo_item(&format!("p{i}"), &[i as f64, (21 - i) as f64]))
        .collect();
    let tree = KdTree::build(db.clone(), 2, DescriptorType::ColorHisto).unwrap();
    let query = histo_item("q", &[100.0, 1.0]);
    let top = tree
        .search_knn(&query, 1, &Cosine, DescriptorType::ColorHisto)
        .unwrap();
    assert_eq!(top[0].id(), "p20");
}

#[test]
fn lookup_matches_on_the_splitting_coordinate_only() {
    // The root splits on axis 0 at x = 2. An unrelated item with x = 2 is
    // reported as present because lookup stops at the first node whose
    // splitting coordinate matches.
    let db = vec![
        histo_item("a", &[1.0, 1.0]),
        histo_item("b", &[2.0, 9.0]),
        histo_item("c", &[3.0, 3.0]),
    ];
    let mut tree = KdTree::build(db, 2, DescriptorType::ColorHisto).unwrap();
    let impostor = histo_item("impostor", &[2.0, -40.0]);
    assert!(tree.contains(&impostor).unwrap());

    // Removing the impostor removes "b".
    assert!(tree.remove(&impostor).unwrap());
    assert!(!ids(&tree.items()).contains("b"));
    assert_eq!(tree.len(), 2);
}

#[test]
fn insert_then_find_itself() {
    let mut tree = KdTree::build(five_point_database(), 2, DescriptorType::ColorHisto).unwrap();
    let newcomer = histo_item("newcomer", &[2.5, 3.5]);
    tree.insert(Arc::clone(&newcomer)).unwrap();
    assert_eq!(tree.len(), 6);
    let hit = tree
        .nearest(&newcomer, 1, &Euclidean, DescriptorType::ColorHisto)
        .unwrap();
    assert_eq!(hit[0].0.id(), "newcomer");
    assert_eq!(hit[0].1, 0.0);
}

#[test]
fn missing_descriptor_fails_fast() {
    let tree = KdTree::build(five_point_database(), 2, DescriptorType::ColorHisto).unwrap();
    let bare = Item::new("bare");
    let err = tree
        .search_knn(&bare, 1, &Euclidean, DescriptorType::ColorHisto)
        .unwrap_err();
    assert!(matches!(err, RefindError::DescriptorUnavailable { .. }));
}

#[test]
fn search_on_another_type_is_rejected() {
    let tree = KdTree::build(five_point_database(), 2, DescriptorType::ColorHisto).unwrap();
    let query = histo_item("q", &[0.0, 0.0]);
    let err = tree
        .search_knn(&query, 1, &Euclidean, DescriptorType::Merged)
        .unwrap_err();
    assert!(matches!(err, RefindError::IndexError(_)));
}

#[test]
fn unpruned_search_over_a_degenerate_chain_stays_on_a_small_stack() {
    const CHAIN: usize = 10_000;

    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            // Sorted inserts leave every node with only a greater child.
            let mut tree = KdTree::new(1, DescriptorType::ColorHisto).unwrap();
            for i in 0..CHAIN {
                tree.insert(histo_item(&format!("n{i}"), &[i as f64])).unwrap();
            }
            assert_eq!(tree.height(), CHAIN);

            let query = histo_item("q", &[-1.0]);
            let all = tree
                .nearest(&query, CHAIN, &Euclidean, DescriptorType::ColorHisto)
                .unwrap();
            assert_eq!(all.len(), CHAIN);
            assert_eq!(all[0].0.id(), "n0");
            assert_eq!(all[CHAIN - 1].0.id(), format!("n{}", CHAIN - 1));
            assert!(all.windows(2).all(|w| w[0].1 <= w[1].1));

            let mut planar = KdTree::new(1, DescriptorType::ColorHisto).unwrap();
            for i in 0..CHAIN {
                planar
                    .insert(histo_item(&format!("p{i}"), &[i as f64 + 1.0, 1.0]))
                    .unwrap();
            }
            let along_axis = histo_item("q", &[1.0, 0.0]);
            let top = planar
                .search_knn(&along_axis, 3, &Cosine, DescriptorType::ColorHisto)
                .unwrap();
            assert_eq!(top[0].id(), format!("p{}", CHAIN - 1));
        })
        .unwrap();
    handle.join().unwrap();
}
