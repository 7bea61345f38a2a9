// Range view tests: bounded ascending scans over [low, high).

use search_tree::{Error, SearchTree, TreeCursor};

fn one_to_seven() -> SearchTree<i32, String> {
    let names = ["one", "two", "three", "four", "five", "six", "seven"];
    let mut tree = SearchTree::new();
    for (i, name) in names.iter().enumerate() {
        tree.insert(i as i32 + 1, name.to_string());
    }
    tree
}

fn collect(tree: &SearchTree<i32, String>, low: i32, high: i32) -> Vec<(i32, &str)> {
    tree.range(low, high)
        .into_iter()
        .map(|(k, v)| (*k, v.as_str()))
        .collect()
}

// =============================================================================
// Test 1: Range strictly inside the key set
// =============================================================================
#[test]
fn range_inside() {
    let tree = one_to_seven();
    assert_eq!(collect(&tree, 2, 4), [(2, "two"), (3, "three")]);
}

// =============================================================================
// Test 2: Range entirely above the key set
// =============================================================================
#[test]
fn range_above_all_keys_is_empty() {
    let tree = one_to_seven();
    assert!(collect(&tree, 8, 10).is_empty());
    assert!(tree.range(8, 10).is_empty());
}

// =============================================================================
// Test 3: Low bound below every key
// =============================================================================
#[test]
fn range_left_half() {
    let tree = one_to_seven();
    assert_eq!(
        collect(&tree, -10, 4),
        [(1, "one"), (2, "two"), (3, "three")]
    );
}

// =============================================================================
// Test 4: High bound above every key
// =============================================================================
#[test]
fn range_right_half() {
    let tree = one_to_seven();
    assert_eq!(
        collect(&tree, 4, 10),
        [(4, "four"), (5, "five"), (6, "six"), (7, "seven")]
    );
}

// =============================================================================
// Test 5: Empty and inverted intervals yield nothing
// =============================================================================
// The bound is checked before the first entry too, so [k, k) and [high, low)
// never yield.
#[test]
fn empty_and_inverted_intervals() {
    let tree = one_to_seven();
    assert!(collect(&tree, 5, 5).is_empty());
    assert!(collect(&tree, 6, 3).is_empty());
    assert!(tree.range(5, 5).is_empty());
    assert!(!tree.range(5, 6).is_empty());

    let empty: SearchTree<i32, String> = SearchTree::new();
    assert!(collect(&empty, 0, 100).is_empty());
}

// =============================================================================
// Test 6: Low bound between keys
// =============================================================================
#[test]
fn low_bound_between_keys() {
    let tree: SearchTree<i32, i32> = (0..50).map(|k| (k * 2, k)).collect();
    let keys: Vec<i32> = tree.range(7, 15).into_iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, [8, 10, 12, 14]);
}

// =============================================================================
// Test 7: Every interval over a dense key set
// =============================================================================
#[test]
fn every_interval_matches_filter() {
    let tree: SearchTree<i32, i32> = (0..40).map(|k| (k, -k)).collect();
    for low in -2..42 {
        for high in -2..42 {
            let actual: Vec<i32> = tree.range(low, high).into_iter().map(|(k, _)| *k).collect();
            let expected: Vec<i32> = (0..40).filter(|k| low <= *k && *k < high).collect();
            assert_eq!(actual, expected, "[{low}, {high})");
        }
    }
}

// =============================================================================
// Test 8: Stepping a range cursor by hand
// =============================================================================
#[test]
fn range_cursor_stepping() {
    let tree = one_to_seven();
    let range = tree.range(2, 4);
    let mut cursor = range.begin();

    assert_eq!(cursor.entry().unwrap(), (&2, &"two".to_string()));
    cursor.advance().unwrap();
    assert_eq!(cursor.key().unwrap(), &3);
    cursor.advance().unwrap();

    assert!(!cursor.has_next());
    assert!(cursor == range.end());
    assert_eq!(cursor.advance(), Err(Error::ExhaustedCursor));
    assert_eq!(cursor.value(), Err(Error::ExhaustedCursor));
}

// =============================================================================
// Test 9: Range cursor equality includes the bound
// =============================================================================
#[test]
fn range_cursor_equality_includes_bound() {
    let tree = one_to_seven();
    let short = tree.range(2, 4);
    let long = tree.range(2, 6);

    assert!(short.begin() == short.begin());
    assert!(short.begin() != long.begin());
    assert!(short.end() != long.end());
    assert_eq!(short.high(), &4);
    assert_eq!(short.begin().high(), &4);
}

// =============================================================================
// Test 10: Iterating a view by reference
// =============================================================================
#[test]
fn range_view_by_reference() {
    let tree = one_to_seven();
    let range = tree.range(6, 100);

    let mut first_pass = Vec::new();
    for (k, _) in &range {
        first_pass.push(*k);
    }
    let second_pass: Vec<i32> = range.iter().map(|(k, _)| *k).collect();
    assert_eq!(first_pass, [6, 7]);
    assert_eq!(first_pass, second_pass);
}
