// Red-black invariant tests under randomized workloads.
//
// Every mutation is followed by validate(), which checks root color,
// no red-red links, uniform black-height, key order and entry count.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use search_tree::SearchTree;

fn assert_matches(tree: &SearchTree<u32, u64>, model: &BTreeMap<u32, u64>) {
    let actual: Vec<(u32, u64)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(u32, u64)> = model.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(actual, expected);
    assert_eq!(tree.len(), model.len());
}

// =============================================================================
// Test 1: Random inserts and erases keep every invariant
// =============================================================================
// 20,000 operations over a small key space so that inserts of present keys
// and erases of absent keys both happen often.
#[test]
fn random_workload_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut tree = SearchTree::new();
    let mut model = BTreeMap::new();

    for step in 0..20_000u64 {
        let key = rng.gen_range(0..512u32);
        if rng.gen_bool(0.55) {
            let inserted = tree.insert(key, step);
            let expected = !model.contains_key(&key);
            model.entry(key).or_insert(step);
            assert_eq!(inserted, expected, "insert {key} at step {step}");
        } else {
            assert_eq!(tree.erase(&key), model.remove(&key), "erase {key} at step {step}");
        }
        if let Err(e) = tree.validate() {
            panic!("step {step}: {e}");
        }
    }
    assert_matches(&tree, &model);
}

// =============================================================================
// Test 2: Insert a permutation, erase a different one
// =============================================================================
// The tree must end up empty with every key absent.
#[test]
fn permutation_round_trip_leaves_empty_tree() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut keys: Vec<u32> = (0..3000).collect();

    keys.shuffle(&mut rng);
    let mut tree = SearchTree::new();
    for &key in &keys {
        assert!(tree.insert(key, u64::from(key) * 3));
        tree.validate().unwrap();
    }
    assert_eq!(tree.len(), keys.len());

    keys.shuffle(&mut rng);
    for &key in &keys {
        assert_eq!(tree.erase(&key), Some(u64::from(key) * 3));
        tree.validate().unwrap();
    }

    assert!(tree.is_empty());
    assert!(tree.begin() == tree.end());
    assert!(keys.iter().all(|key| tree.find(key) == tree.end()));
}

// =============================================================================
// Test 3: Ascending and descending inserts, erased from the middle out
// =============================================================================
#[test]
fn sorted_inserts_then_middle_out_erases() {
    let mut ascending = SearchTree::new();
    let mut descending = SearchTree::new();
    for key in 0..1024u32 {
        ascending.insert(key, ());
        descending.insert(1023 - key, ());
    }
    ascending.validate().unwrap();
    descending.validate().unwrap();

    for offset in 0..512u32 {
        for tree in [&mut ascending, &mut descending] {
            tree.erase(&(511 - offset));
            tree.erase(&(512 + offset));
            tree.validate().unwrap();
        }
    }
    assert!(ascending.is_empty());
    assert!(descending.is_empty());
}

// =============================================================================
// Test 4: Values survive rebalancing
// =============================================================================
// Erasing internal nodes moves successor entries around; each surviving key
// must still map to the value it was inserted with.
#[test]
fn values_follow_their_keys() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut tree = SearchTree::new();
    let mut model = BTreeMap::new();
    for _ in 0..2000 {
        let key = rng.gen_range(0..10_000u32);
        let value = rng.r#gen::<u64>();
        tree.insert(key, value);
        model.entry(key).or_insert(value);
    }

    let victims: Vec<u32> = model.keys().copied().step_by(3).collect();
    for key in victims {
        tree.erase(&key);
        model.remove(&key);
    }
    tree.validate().unwrap();
    assert_matches(&tree, &model);
}

// =============================================================================
// Test 5: Range scans agree with the model after churn
// =============================================================================
#[test]
fn ranges_agree_with_model_after_churn() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut tree = SearchTree::new();
    let mut model = BTreeMap::new();
    for step in 0..5000u64 {
        let key = rng.gen_range(0..1000u32);
        if step % 3 == 0 {
            tree.erase(&key);
            model.remove(&key);
        } else {
            tree.insert(key, step);
            model.entry(key).or_insert(step);
        }
    }

    for _ in 0..200 {
        let low = rng.gen_range(0..1100u32);
        let high = rng.gen_range(0..1100u32);
        let actual: Vec<u32> = tree.range(low, high).into_iter().map(|(k, _)| *k).collect();
        let expected: Vec<u32> = if low < high {
            model.range(low..high).map(|(k, _)| *k).collect()
        } else {
            Vec::new()
        };
        assert_eq!(actual, expected, "[{low}, {high})");
    }
}
