//! Proxima - positional proximity evaluation for term postings
//!
//! Proxima decides whether query terms occur in a document under positional
//! constraints (within N tokens, adjacent, in phrase order, optionally above a
//! score threshold) and reports which zones matched and, for phrases, the
//! matched offset span for highlighting.
//!
//! # Quick Start
//!
//! ```
//! use proxima::{ContentFunction, Position, TermOffsetMap, Zone};
//!
//! let body = Zone::new("BODY", true, "shard\0dt\0uid");
//! let mut map = TermOffsetMap::new();
//! map.put("dog", body.clone(), [Position::new(1), Position::new(2), Position::new(3)]);
//! map.put("cat", body, [Position::new(3), Position::new(4), Position::new(5)]);
//!
//! let call: ContentFunction = "content:phrase(termOffsetMap, 'dog', 'cat')".parse()?;
//! let outcome = call.evaluate(&mut map)?;
//!
//! assert!(outcome.matched_zone("BODY"));
//! assert_eq!(map.phrase_offsets("BODY")[0].to_string(), "[2, 3]");
//! # Ok::<(), proxima::ProximaError>(())
//! ```
//!
//! # Architecture
//!
//! - `proxima-core`: positions, zones, errors and configuration
//! - `proxima-postings`: the per-document TermOffsetMap and span recorder
//! - `proxima-engine`: the evaluator and the content function grammar

pub use proxima_core::{
    position_score_to_weight, weight_to_position_score, Position, ProximaConfig, ProximaError,
    ProximaResult, Zone, ZoneFilter, ANY_FIELD, CONFIG_FILE_NAME, DEFAULT_TERM_OFFSET_MAP_VARIABLE,
};
pub use proxima_engine::{
    adjacent, phrase, scored_phrase, within, ContentFunction, Mode, ProximityEvaluator,
    ProximityOutcome, ProximityRequest, CONTENT_NAMESPACE,
};
pub use proxima_postings::{MatchSpan, SpanRecorder, TermFrequencyList, TermOffsetMap};
