//! Tier 5: Zones
//!
//! Evaluation is per zone. A zone is a field of one document instance, and
//! only zones in which every term occurs can match.

use super::test_utils::*;
use proxima::{Position, TermFrequencyList, TermOffsetMap, Zone, ZoneFilter};
use std::collections::BTreeSet;

fn zone(name: &str) -> Zone {
    Zone::new(name, true, "shard\0dt\0uid")
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Content expansion
// ============================================================================

/// Fields that are not content expansion fields are skipped when no zone is named
#[test]
fn test_tier5_no_content_fields() {
    let mut map = TermOffsetMap::new();
    let plain = Zone::new("CONTENT", false, EVENT_ID);
    map.put("dog", plain.clone(), positions(&[1, 2, 3]));
    map.put("cat", plain, positions_with_skips(&[5, 6, 7], &[0, 0, 3]));

    assert!(!evaluate(&call("within", &["1"], &["dog", "cat"]), &mut map));
}

#[test]
fn test_tier5_named_zone_ignores_content_expansion() {
    let mut map = TermOffsetMap::new();
    let plain = Zone::new("CONTENT", false, EVENT_ID);
    map.put("dog", plain.clone(), positions(&[1, 2, 3]));
    map.put("cat", plain, positions_with_skips(&[5, 6, 7], &[0, 0, 3]));

    assert!(evaluate(&call("within", &["'CONTENT'", "1"], &["dog", "cat"]), &mut map));
}

// ============================================================================
// Document instances
// ============================================================================

/// bat lives in a different document instance than dog
#[test]
fn test_tier5_multi_event() {
    let mut map = TermOffsetMap::new();
    put(&mut map, "dog", positions(&[1, 2, 3]));
    put(&mut map, "cat", positions(&[4, 5, 6]));
    map.put(
        "bat",
        Zone::new("CONTENT", true, format!("{}.1", EVENT_ID)),
        positions(&[4, 5, 6]),
    );

    let dog_cat = evaluate(&call("within", &["3"], &["dog", "cat"]), &mut map);
    let dog_bat = evaluate(&call("within", &["3"], &["dog", "bat"]), &mut map);
    assert!(dog_cat);
    assert!(!dog_bat);
    assert!(dog_cat || dog_bat);
}

#[test]
fn test_tier5_same_field_in_two_instances_matches_once_by_name() {
    let mut map = TermOffsetMap::new();
    let first = Zone::new("BODY", true, "shard\0dt\0a");
    let second = Zone::new("BODY", true, "shard\0dt\0b");
    map.put("dog", first.clone(), positions(&[1]));
    map.put("cat", first, positions(&[9]));
    map.put("dog", second.clone(), positions(&[4]));
    map.put("cat", second, positions(&[5]));

    let outcome = proxima::phrase(ZoneFilter::All, &mut map, ["dog", "cat"]).unwrap();
    assert_eq!(outcome, set(&["BODY"]));
    assert_eq!(map.phrase_offsets("BODY"), vec![proxima::MatchSpan::new(4, 5)]);
}

// ============================================================================
// Terms missing from the named zone
// ============================================================================

/// car also has a META zone, but foo and bar are only in BODY and far apart
fn body_meta_map() -> TermOffsetMap {
    let mut map = TermOffsetMap::new();
    let body = Zone::new("BODY", true, EVENT_ID);
    let meta = Zone::new("META", true, EVENT_ID);
    map.put("foo", body.clone(), positions(&[296]));
    map.put("bar", body.clone(), positions(&[1079]));

    let mut car = TermFrequencyList::from_zone(body, positions(&[260, 284, 304]));
    car.put(meta, positions(&[1165]));
    map.put_term_frequency_list("car", car);
    map
}

#[test]
fn test_tier5_some_empty_offsets_phrase() {
    let mut map = body_meta_map();
    assert!(!evaluate(&call("phrase", &["BODY"], &["foo", "bar", "car"]), &mut map));
}

#[test]
fn test_tier5_some_empty_offsets_adjacent() {
    let mut map = body_meta_map();
    assert!(!evaluate(&call("adjacent", &["BODY"], &["foo", "bar", "car"]), &mut map));
}

#[test]
fn test_tier5_some_empty_offsets_within() {
    let mut map = body_meta_map();
    assert!(!evaluate(
        &call("within", &["BODY", "5"], &["foo", "bar", "car"]),
        &mut map
    ));
}

#[test]
fn test_tier5_term_only_in_other_zone() {
    let mut map = TermOffsetMap::new();
    map.put("dog", zone("BODY"), positions(&[1]));
    map.put("cat", zone("TITLE"), positions(&[2]));

    assert!(proxima::within(ZoneFilter::All, 10, &mut map, ["dog", "cat"])
        .unwrap()
        .is_empty());
}

// ============================================================================
// Zone filters
// ============================================================================

/// The only phrase match, [19, 20], is in ZONE2
fn two_zone_map() -> TermOffsetMap {
    let mut map = TermOffsetMap::new();
    map.put("some", zone("ZONE1"), positions(&[1, 100]));
    map.put_term_frequency_list(
        "some",
        TermFrequencyList::from_zone(zone("ZONE2"), positions(&[19])),
    );
    map.put("phrase", zone("ZONE1"), positions(&[10, 1000]));
    map.put_term_frequency_list(
        "phrase",
        TermFrequencyList::from_zone(zone("ZONE2"), positions(&[20, 27])),
    );
    map
}

#[test]
fn test_tier5_ignore_irrelevant_zones() {
    let terms = ["some", "phrase"];

    let mut map = two_zone_map();
    let zone1 = proxima::phrase(ZoneFilter::named("ZONE1"), &mut map, terms).unwrap();
    assert!(zone1.is_empty());
    assert_phrase_offsets_empty(&map);

    let zone2 = proxima::phrase(ZoneFilter::named("ZONE2"), &mut map, terms).unwrap();
    assert_eq!(zone2, set(&["ZONE2"]));

    let mut map = two_zone_map();
    let both =
        proxima::phrase(ZoneFilter::from_names(["ZONE1", "ZONE2"]).unwrap(), &mut map, terms)
            .unwrap();
    assert_eq!(both, set(&["ZONE2"]));
    assert_phrase_offset(&map, "ZONE2", 19, 20);
    assert!(map.phrase_offsets("ZONE1").is_empty());

    let mut map = two_zone_map();
    let any = proxima::phrase(ZoneFilter::All, &mut map, terms).unwrap();
    assert_eq!(any, set(&["ZONE2"]));
}

#[test]
fn test_tier5_zone_group_in_call() {
    let mut map = two_zone_map();

    assert!(evaluate(
        &call("phrase", &["(ZONE1 || 'ZONE2')"], &["some", "phrase"]),
        &mut map
    ));
    assert_phrase_offset(&map, "ZONE2", 19, 20);

    let mut map = two_zone_map();
    assert!(!evaluate(&call("phrase", &["'ZONE1'"], &["some", "phrase"]), &mut map));
}

/// Spans are reported per zone and merged under the any-field key
#[test]
fn test_tier5_spans_per_zone() {
    let mut map = TermOffsetMap::new();
    map.put("hello", zone("BODY"), positions(&[3]));
    map.put("world", zone("BODY"), positions(&[4]));
    map.put("hello", zone("TITLE"), [Position::new(0)]);
    map.put("world", zone("TITLE"), [Position::new(1)]);

    let zones = proxima::phrase(ZoneFilter::All, &mut map, ["hello", "world"]).unwrap();
    assert_eq!(zones, set(&["BODY", "TITLE"]));
    assert_phrase_offset(&map, "BODY", 3, 4);
    assert_phrase_offset(&map, "TITLE", 0, 1);
    assert_any_phrase_offset(&map, 3, 4);
    assert_any_phrase_offset(&map, 0, 1);
    assert_eq!(map.all_phrase_offsets().len(), 2);
}

/// Two instances of a field matching at the same offsets, and a repeated
/// evaluation, leave one span under the field name
#[test]
fn test_tier5_identical_spans_recorded_once() {
    let mut map = TermOffsetMap::new();
    for uid in ["shard\0dt\0a", "shard\0dt\0b"] {
        let body = Zone::new("BODY", true, uid);
        map.put("dog", body.clone(), positions(&[4]));
        map.put("cat", body, positions(&[5]));
    }

    let query = call("phrase", &[], &["dog", "cat"]);
    assert!(evaluate(&query, &mut map));
    assert!(evaluate(&query, &mut map));

    assert_eq!(map.phrase_offsets("BODY"), vec![proxima::MatchSpan::new(4, 5)]);
    assert_eq!(map.phrase_offsets("BODY"), map.all_phrase_offsets());
}
