//! Phrase match spans
//!
//! The evaluator writes one [`MatchSpan`] per matched chain into a
//! [`SpanRecorder`], keyed by the zone name that matched. Callers read spans
//! back per zone, or across every zone through [`ANY_FIELD`].

use proxima_core::ANY_FIELD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Inclusive offsets of the first and last position of a matched chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Offset of the first term's position
    pub start: u32,
    /// Offset of the last term's position
    pub end: u32,
}

impl MatchSpan {
    /// Create a span
    pub fn new(start: u32, end: u32) -> Self {
        MatchSpan { start, end }
    }

    /// Number of offsets covered, counting both ends
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }
}

impl fmt::Display for MatchSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Matched spans per zone name
///
/// Not thread safe by construction: it lives inside one document's
/// `TermOffsetMap` and is written through `&mut`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanRecorder {
    by_zone: BTreeMap<String, Vec<MatchSpan>>,
}

impl SpanRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        SpanRecorder {
            by_zone: BTreeMap::new(),
        }
    }

    /// Append a span for `zone` unless the zone already holds it
    pub fn record(&mut self, zone: &str, start: u32, end: u32) {
        let span = MatchSpan::new(start, end);
        let spans = self.by_zone.entry(zone.to_string()).or_default();
        if !spans.contains(&span) {
            spans.push(span);
        }
    }

    /// Spans recorded for `zone`, in recording order
    ///
    /// [`ANY_FIELD`] returns [`SpanRecorder::all_spans`].
    pub fn spans(&self, zone: &str) -> Vec<MatchSpan> {
        if zone == ANY_FIELD {
            return self.all_spans();
        }
        self.by_zone.get(zone).cloned().unwrap_or_default()
    }

    /// Spans from every zone, sorted and de-duplicated
    pub fn all_spans(&self) -> Vec<MatchSpan> {
        let mut all: Vec<MatchSpan> = self.by_zone.values().flatten().copied().collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    /// Zone names with at least one span
    pub fn zones(&self) -> impl Iterator<Item = &str> {
        self.by_zone.keys().map(String::as_str)
    }

    /// True when no span was recorded
    pub fn is_empty(&self) -> bool {
        self.by_zone.is_empty()
    }

    /// Total number of recorded spans
    pub fn len(&self) -> usize {
        self.by_zone.values().map(Vec::len).sum()
    }

    /// Forget every span
    pub fn clear(&mut self) {
        self.by_zone.clear();
    }
}
