//! Per-document postings index
//!
//! [`TermOffsetMap`] maps each query term to its [`TermFrequencyList`] and
//! carries the [`SpanRecorder`] that phrase evaluation writes into. One map is
//! built per document (or event) being evaluated; maps are never shared
//! between evaluations.

use crate::spans::{MatchSpan, SpanRecorder};
use crate::term_list::TermFrequencyList;
use proxima_core::{Position, Zone};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Term -> positions per zone, plus the spans found while evaluating
#[derive(Debug, Clone, Default)]
pub struct TermOffsetMap {
    terms: FxHashMap<String, TermFrequencyList>,
    spans: SpanRecorder,
}

impl TermOffsetMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Postings
    // ========================================================================

    /// Add positions for `(term, zone)`, merging with what is already there
    pub fn put<I>(&mut self, term: impl Into<String>, zone: Zone, positions: I)
    where
        I: IntoIterator<Item = Position>,
    {
        self.terms
            .entry(term.into())
            .or_default()
            .put(zone, positions);
    }

    /// Install `list` for `term`, merging into an existing list if present
    pub fn put_term_frequency_list(&mut self, term: impl Into<String>, list: TermFrequencyList) {
        match self.terms.entry(term.into()) {
            std::collections::hash_map::Entry::Occupied(mut e) => e.get_mut().merge(list),
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(list);
            }
        }
    }

    /// The posting list for `term`, if any
    pub fn term_frequency_list(&self, term: &str) -> Option<&TermFrequencyList> {
        self.terms.get(term)
    }

    /// True when `term` has a posting list (possibly without positions)
    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Positions of `term` in `zone`; empty when either is unknown
    pub fn positions(&self, term: &str, zone: &Zone) -> Vec<Position> {
        self.terms
            .get(term)
            .map(|list| list.positions(zone))
            .unwrap_or_default()
    }

    /// Zones `term` was registered in
    pub fn zones(&self, term: &str) -> BTreeSet<Zone> {
        self.terms
            .get(term)
            .map(|list| list.zones().cloned().collect())
            .unwrap_or_default()
    }

    /// Iterate the terms in the map (unordered)
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no term has been added
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    // ========================================================================
    // Spans
    // ========================================================================

    /// Spans recorded so far
    pub fn span_recorder(&self) -> &SpanRecorder {
        &self.spans
    }

    /// Mutable access for the evaluator
    pub fn span_recorder_mut(&mut self) -> &mut SpanRecorder {
        &mut self.spans
    }

    /// Record a matched span for `zone`
    pub fn record_span(&mut self, zone: &str, start: u32, end: u32) {
        self.spans.record(zone, start, end);
    }

    /// Spans for `zone`; `ANY_FIELD` returns spans from every zone
    pub fn phrase_offsets(&self, zone: &str) -> Vec<MatchSpan> {
        self.spans.spans(zone)
    }

    /// Spans from every zone, sorted and de-duplicated
    pub fn all_phrase_offsets(&self) -> Vec<MatchSpan> {
        self.spans.all_spans()
    }
}
