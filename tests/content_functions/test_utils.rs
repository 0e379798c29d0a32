//! Test utilities for the content function suite

use proxima::{
    ContentFunction, MatchSpan, Position, ProximaConfig, ProximityEvaluator, TermOffsetMap, Zone,
    ANY_FIELD, DEFAULT_TERM_OFFSET_MAP_VARIABLE,
};

/// Document instance used by most tests
pub const EVENT_ID: &str = "shard\0datatype\0uid";

/// Content expansion zone named `name` in [`EVENT_ID`]
pub fn content_zone(name: &str) -> Zone {
    Zone::new(name, true, EVENT_ID)
}

/// The `CONTENT` zone most tests use
pub fn content() -> Zone {
    content_zone("CONTENT")
}

/// Build `content:<name>(args..)`
pub fn build_function(name: &str, args: &[&str]) -> String {
    format!("content:{}({})", name, args.join(","))
}

/// `build_function` with the variable and quoted terms appended after `leading`
pub fn call(name: &str, leading: &[&str], terms: &[&str]) -> String {
    let quoted: Vec<String> = terms.iter().map(|t| format!("'{}'", t)).collect();
    let mut args: Vec<&str> = leading.to_vec();
    args.push(DEFAULT_TERM_OFFSET_MAP_VARIABLE);
    args.extend(quoted.iter().map(String::as_str));
    build_function(name, &args)
}

/// Positions at `offsets` with no skips
pub fn positions(offsets: &[u32]) -> Vec<Position> {
    offsets.iter().copied().map(Position::new).collect()
}

/// Positions with matching skip counts
pub fn positions_with_skips(offsets: &[u32], skips: &[u32]) -> Vec<Position> {
    assert_eq!(offsets.len(), skips.len(), "offsets and skips size need to match");
    offsets
        .iter()
        .zip(skips)
        .map(|(&o, &s)| Position::new(o).with_skips(s))
        .collect()
}

/// Positions with matching skip counts and scores
pub fn positions_with_scores(offsets: &[u32], skips: &[u32], scores: &[f32]) -> Vec<Position> {
    assert_eq!(offsets.len(), scores.len(), "offsets and scores size need to match");
    positions_with_skips(offsets, skips)
        .into_iter()
        .zip(scores)
        .map(|(p, &score)| p.with_score(score))
        .collect()
}

/// Add `positions` for `term` in the `CONTENT` zone
pub fn put(map: &mut TermOffsetMap, term: &str, positions: Vec<Position>) {
    map.put(term, content(), positions);
}

/// Parse `query` and evaluate it against `map` with the default configuration
pub fn evaluate(query: &str, map: &mut TermOffsetMap) -> bool {
    evaluate_with(&ProximaConfig::default(), query, map)
}

/// Parse `query` and evaluate it against `map` with `config`
pub fn evaluate_with(config: &ProximaConfig, query: &str, map: &mut TermOffsetMap) -> bool {
    let function = ContentFunction::parse_with_config(query, config)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", query, e));
    function
        .evaluate_with(&ProximityEvaluator::new(config.clone()), map)
        .unwrap_or_else(|e| panic!("failed to evaluate {}: {}", query, e))
        .is_match()
}

/// Assert that `[start, end]` was recorded for `zone`
pub fn assert_phrase_offset(map: &TermOffsetMap, zone: &str, start: u32, end: u32) {
    let spans = map.phrase_offsets(zone);
    assert!(
        spans.contains(&MatchSpan::new(start, end)),
        "Expected phrase offset [{}, {}] for field {}, found {:?}",
        start,
        end,
        zone,
        spans
    );
}

/// Assert that `[start, end]` was recorded in any zone
pub fn assert_any_phrase_offset(map: &TermOffsetMap, start: u32, end: u32) {
    assert_phrase_offset(map, ANY_FIELD, start, end);
}

/// Assert that no span was recorded
pub fn assert_phrase_offsets_empty(map: &TermOffsetMap) {
    assert!(
        map.all_phrase_offsets().is_empty(),
        "Expected empty phrase offsets, found {:?}",
        map.all_phrase_offsets()
    );
}
