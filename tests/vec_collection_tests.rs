//! Integration tests for `VecCollection` through the collection contract.

use kollect::prelude::*;
use rstest::rstest;

// =============================================================================
// Population and size
// =============================================================================

#[rstest]
fn test_add_grows_collection() {
    let mut collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    collection.add(4);

    assert_eq!(collection.len(), 4);
    assert_eq!(collection.to_vec(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_add_all_matches_repeated_add() {
    let mut bulk: VecCollection<i32> = VecCollection::new();
    bulk.add_all([1, 2, 2, 3]);

    let mut one_by_one: VecCollection<i32> = VecCollection::new();
    for value in [1, 2, 2, 3] {
        one_by_one.add(value);
    }

    assert_eq!(bulk, one_by_one);
}

#[rstest]
fn test_clear_then_is_empty() {
    let mut collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    collection.clear();

    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
}

// =============================================================================
// Membership
// =============================================================================

#[rstest]
fn test_contains_all_and_any() {
    let collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();

    assert!(collection.contains_all(&[1, 2]));
    assert!(!collection.contains_all(&[1, 4]));
    assert!(collection.contains_any(&[4, 3]));
    assert!(!collection.contains_any(&[4, 5]));

    // Vacuous cases.
    assert!(collection.contains_all(&[]));
    assert!(!collection.contains_any(&[]));
}

// =============================================================================
// Set algebra scenarios
// =============================================================================

#[rstest]
fn test_union_scenario() {
    let collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    let other: VecCollection<i32> = [3, 4, 5].into_iter().collect();

    let union = collection.union(&other);

    assert_eq!(union.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_intersection_scenario() {
    let collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    let other: VecCollection<i32> = [2, 3, 4].into_iter().collect();

    let intersection = collection.intersection(&other);

    assert_eq!(intersection.to_vec(), vec![2, 3]);
    assert_eq!(intersection.len(), 2);
}

#[rstest]
fn test_retain_all_scenario() {
    let mut collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    let other: VecCollection<i32> = [2, 3, 4].into_iter().collect();

    collection.retain_all(&other);

    assert_eq!(collection.to_vec(), vec![2, 3]);
}

#[rstest]
fn test_set_algebra_leaves_operands_untouched() {
    let collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    let other: VecCollection<i32> = [2, 3, 4].into_iter().collect();

    let _ = collection.union(&other);
    let _ = collection.intersection(&other);
    let _ = collection.difference(&other);
    let _ = collection.symmetric_difference(&other);

    assert_eq!(collection.to_vec(), vec![1, 2, 3]);
    assert_eq!(other.to_vec(), vec![2, 3, 4]);
}

// =============================================================================
// Derived-key operations
// =============================================================================

fn first_char(value: &String) -> String {
    value.chars().take(1).collect()
}

#[rstest]
fn test_remove_all_by_key_scenario() {
    let mut collection: VecCollection<String> =
        ["a1", "a2", "b1"].into_iter().map(String::from).collect();

    collection.remove_all_by_key(&["a9".to_string()], first_char);

    assert_eq!(collection.to_vec(), vec!["b1".to_string()]);
}

#[rstest]
fn test_retain_all_by_key_scenario() {
    let mut collection: VecCollection<String> =
        ["a1", "b2", "c3"].into_iter().map(String::from).collect();
    let other: VecCollection<String> = ["b9"].into_iter().map(String::from).collect();

    collection.retain_all_by_key(&other, first_char);

    assert_eq!(collection.to_vec(), vec!["b2".to_string()]);
}

#[rstest]
fn test_intersection_by_key_keeps_receiver_value() {
    let collection: VecCollection<String> =
        ["a1", "b1"].into_iter().map(String::from).collect();
    let other: VecCollection<String> = ["a2", "c2"].into_iter().map(String::from).collect();

    let intersection = collection.intersection_by_key(&other, first_char);

    assert_eq!(intersection.to_vec(), vec!["a1".to_string()]);
}

// =============================================================================
// Copying and traversal
// =============================================================================

#[rstest]
fn test_copy_equals_original_until_mutated() {
    let original: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    let mut copy = original.clone();

    assert_eq!(copy, original);

    copy.add(4);
    assert_ne!(copy, original);
    assert_eq!(original.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_for_each_indexes_follow_iteration_order() {
    let collection: VecCollection<char> = ['x', 'y', 'z'].into_iter().collect();
    let mut visited = Vec::new();

    collection.for_each(|index, element| visited.push((index, *element)));

    assert_eq!(visited, vec![(0, 'x'), (1, 'y'), (2, 'z')]);
}

#[rstest]
fn test_to_vec_snapshot_is_stable() {
    let collection: VecCollection<i32> = [5, 3, 5].into_iter().collect();
    assert_eq!(collection.to_vec(), collection.to_vec());
}

// =============================================================================
// Multiset-specific behavior
// =============================================================================

#[rstest]
fn test_duplicates_survive_round_trips_through_algebra() {
    let collection: VecCollection<i32> = [1, 1, 2].into_iter().collect();
    let everything: VecCollection<i32> = [1, 2].into_iter().collect();

    // Intersecting with a superset keeps the receiver's duplicates.
    let intersection = collection.intersection(&everything);
    assert_eq!(intersection.to_vec(), vec![1, 1, 2]);
}

#[rstest]
fn test_remove_all_empties_matching_duplicates() {
    let mut collection: VecCollection<i32> = [7, 7, 7, 8].into_iter().collect();
    collection.remove_all(&[7]);
    assert_eq!(collection.to_vec(), vec![8]);
}
