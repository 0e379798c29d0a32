//! Tier 2: Adjacent
//!
//! `adjacent` with n terms behaves as `within(n - 1)`.

use super::test_utils::*;
use proxima::TermOffsetMap;

#[test]
fn test_tier2_adjacent_pair() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1]));
    put(&mut map, "cat", positions(&[2]));

    assert!(evaluate(&call("adjacent", &[], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier2_gap_fails() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", positions(&[5, 6, 7]));

    assert!(!evaluate(&call("adjacent", &[], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier2_single_far_position() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", positions(&[5]));

    assert!(!evaluate(&call("adjacent", &[], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier2_empty_offset_list() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", Vec::new());

    assert!(!evaluate(&call("adjacent", &[], &["dog", "cat"]), &mut map));
}

/// Unordered: dog@9, rat@10, cat@11 covers three consecutive offsets
#[test]
fn test_tier2_three_terms() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 5, 9]));
    put(&mut map, "cat", positions(&[3, 7, 11]));
    put(&mut map, "rat", positions(&[10, 15, 20, 25]));

    assert!(evaluate(&call("adjacent", &[], &["dog", "cat", "rat"]), &mut map));
}

#[test]
fn test_tier2_failed_three_terms() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", positions(&[3, 4, 5]));
    put(&mut map, "rat", positions(&[10, 15, 20, 25]));

    assert!(!evaluate(&call("adjacent", &[], &["dog", "cat", "rat"]), &mut map));
}

/// Reversed order is still adjacent
#[test]
fn test_tier2_order_is_irrelevant() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[8]));
    put(&mut map, "cat", positions(&[7]));

    assert!(evaluate(&call("adjacent", &[], &["dog", "cat"]), &mut map));
    assert_phrase_offsets_empty(&map);
}

/// Skips on the later position close a gap of two
#[test]
fn test_tier2_skips() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[3]));
    put(&mut map, "cat", positions_with_skips(&[5], &[1]));

    assert!(evaluate(&call("adjacent", &[], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier2_matches_within_term_count_minus_one() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "a", positions(&[2, 30]));
    put(&mut map, "b", positions(&[5, 31]));
    put(&mut map, "c", positions(&[4, 33]));

    let adjacent = evaluate(&call("adjacent", &[], &["a", "b", "c"]), &mut map);
    let within = evaluate(&call("within", &["2"], &["a", "b", "c"]), &mut map);
    assert_eq!(adjacent, within);
    assert!(!adjacent);

    put(&mut map, "c", positions(&[32]));
    assert!(evaluate(&call("adjacent", &[], &["a", "b", "c"]), &mut map));
}
