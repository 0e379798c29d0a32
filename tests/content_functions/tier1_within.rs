//! Tier 1: Within
//!
//! Unordered matching within a skip-adjusted distance.

use super::test_utils::*;
use proxima::TermOffsetMap;

// ============================================================================
// Two terms
// ============================================================================

/// cat@6 with two skips reaches back to 4, one past dog@3
#[test]
fn test_tier1_skips_close_the_gap() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions_with_skips(&[1, 2, 3], &[0, 0, 0]));
    put(&mut map, "cat", positions_with_skips(&[5, 6, 7], &[0, 2, 0]));

    assert!(evaluate(&call("within", &["1"], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier1_single_positions() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1]));
    put(&mut map, "cat", positions(&[2]));

    assert!(evaluate(&call("within", &["1"], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier1_too_far_apart() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", positions(&[5, 6, 7]));

    assert!(!evaluate(&call("within", &["1"], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier1_single_far_position() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", positions(&[5]));

    assert!(!evaluate(&call("within", &["1"], &["dog", "cat"]), &mut map));
}

/// Order is irrelevant: cat precedes dog
#[test]
fn test_tier1_reverse_order_with_skips() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions_with_skips(&[4], &[1]));
    put(&mut map, "cat", positions_with_skips(&[2], &[1]));

    assert!(evaluate(&call("within", &["1"], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier1_empty_offset_list() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", Vec::new());

    assert!(!evaluate(&call("within", &["1"], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier1_missing_term() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));

    assert!(!evaluate(&call("within", &["5"], &["dog", "cat"]), &mut map));
}

// ============================================================================
// Three terms
// ============================================================================

/// dog@9, rat@10, cat@11
#[test]
fn test_tier1_three_terms() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 5, 9]));
    put(&mut map, "cat", positions(&[3, 7, 11]));
    put(&mut map, "rat", positions(&[10, 15, 20, 25]));

    assert!(evaluate(&call("within", &["3"], &["dog", "cat", "rat"]), &mut map));
}

#[test]
fn test_tier1_three_terms_too_small_distance() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", positions(&[3, 4, 5]));
    put(&mut map, "rat", positions(&[10, 15, 20, 25]));

    assert!(!evaluate(&call("within", &["2"], &["dog", "cat", "rat"]), &mut map));
}

#[test]
fn test_tier1_failed_three_terms() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", positions(&[3, 4, 5]));
    put(&mut map, "rat", positions(&[10, 15, 20, 25]));

    assert!(!evaluate(&call("within", &["3"], &["dog", "cat", "rat"]), &mut map));
}

/// cat@4, dog@5, rat@6 sit in the middle of each list
#[test]
fn test_tier1_middle_match() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 5, 10]));
    put(&mut map, "cat", positions(&[2, 4, 20]));
    put(&mut map, "rat", positions(&[6, 8, 15]));

    assert!(evaluate(&call("within", &["2"], &["dog", "cat", "rat"]), &mut map));
}

// ============================================================================
// Repeated terms
// ============================================================================

#[test]
fn test_tier1_same_term_success() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "cat", positions(&[1, 3]));

    assert!(evaluate(&call("within", &["2"], &["cat", "cat"]), &mut map));
}

#[test]
fn test_tier1_same_term_failure() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "cat", positions(&[1, 4]));

    assert!(!evaluate(&call("within", &["2"], &["cat", "cat"]), &mut map));
    assert_phrase_offsets_empty(&map);
}

#[test]
fn test_tier1_same_term_with_skips() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "cat", positions_with_skips(&[1, 4], &[0, 1]));

    assert!(evaluate(&call("within", &["2"], &["cat", "cat"]), &mut map));
}

#[test]
fn test_tier1_same_term_single_position() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "cat", positions(&[4]));

    assert!(!evaluate(&call("within", &["10"], &["cat", "cat"]), &mut map));
}

#[test]
fn test_tier1_mixed_terms() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "cat", positions(&[1, 5]));
    put(&mut map, "dog", positions(&[3]));

    assert!(evaluate(&call("within", &["4"], &["cat", "dog"]), &mut map));
}

/// Either call matching is enough when several are combined with OR
#[test]
fn test_tier1_alternative_calls() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 4]));
    put(&mut map, "cat", positions(&[4, 5, 6]));
    put(&mut map, "bat", positions(&[11, 12, 14]));

    let three = evaluate(&call("within", &["3"], &["bat", "dog", "cat"]), &mut map);
    let two = evaluate(&call("within", &["3"], &["dog", "cat"]), &mut map);
    assert!(!three);
    assert!(two);
    assert!(three || two);
}

/// Within never records spans
#[test]
fn test_tier1_records_no_spans() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1]));
    put(&mut map, "cat", positions(&[2]));

    assert!(evaluate(&call("within", &["1"], &["dog", "cat"]), &mut map));
    assert_phrase_offsets_empty(&map);
}
