//! Proximity evaluation for Proxima
//!
//! This crate provides:
//! - Mode / ProximityRequest: what a content function call asks for
//! - ProximityEvaluator: per-zone evaluation of a request over a TermOffsetMap
//! - PhraseSearch: memoised ordered chain search (phrase, scoredPhrase)
//! - find_window: unordered window search (within, adjacent)
//! - ContentFunction: parsing and rendering of `content:` function calls
//! - within / adjacent / phrase / scored_phrase: one-shot convenience calls
//!
//! # Usage
//!
//! ```
//! use proxima_core::{Position, Zone};
//! use proxima_engine::{ProximityEvaluator, ProximityRequest};
//! use proxima_postings::TermOffsetMap;
//!
//! let zone = Zone::new("BODY", true, "shard\0dt\0uid");
//! let mut map = TermOffsetMap::new();
//! map.put("hello", zone.clone(), [Position::new(4)]);
//! map.put("world", zone, [Position::new(5)]);
//!
//! let outcome = ProximityEvaluator::default()
//!     .evaluate(&ProximityRequest::phrase(["hello", "world"]), &mut map)
//!     .unwrap();
//! assert!(outcome.matched_zone("BODY"));
//! assert_eq!(map.phrase_offsets("BODY")[0].to_string(), "[4, 5]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod evaluator;
pub mod function;
pub mod mode;
pub mod ordered;
pub mod slots;
pub mod unordered;

pub use content::{adjacent, phrase, scored_phrase, within};
pub use evaluator::{ProximityEvaluator, ProximityOutcome};
pub use function::{ContentFunction, CONTENT_NAMESPACE};
pub use mode::{Mode, ProximityRequest};
pub use ordered::PhraseSearch;
pub use slots::TermSlots;
pub use unordered::{find_window, scan_window, WindowScan};
