//! Postings for proximity evaluation
//!
//! This crate provides:
//! - TermFrequencyList: per-zone ordered positions of one term
//! - TermOffsetMap: the per-document postings index, term -> TermFrequencyList
//! - SpanRecorder / MatchSpan: phrase match spans written during evaluation
//!
//! A TermOffsetMap is built once per document by the retrieval layer, handed
//! to the evaluator by `&mut`, and read back afterwards for highlighting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod offset_map;
pub mod spans;
pub mod term_list;

pub use offset_map::TermOffsetMap;
pub use spans::{MatchSpan, SpanRecorder};
pub use term_list::TermFrequencyList;
