//! Proximity evaluator
//!
//! This module provides:
//! - ProximityEvaluator: runs a [`ProximityRequest`] against a [`TermOffsetMap`]
//! - ProximityOutcome: the set of zone names that matched
//!
//! Evaluation is per zone. The zones considered are those in which the first
//! term was seen, admitted by the request's [`ZoneFilter`], and in which every
//! term has at least one position. A document matches when any zone does.
//! Phrase modes write the matched span of each zone into the map's
//! [`SpanRecorder`](proxima_postings::SpanRecorder).

use crate::mode::ProximityRequest;
use crate::ordered::PhraseSearch;
use crate::slots::TermSlots;
use crate::unordered::scan_window;
use proxima_core::{ProximaConfig, ProximaResult, Zone, ZoneFilter};
use proxima_postings::{MatchSpan, TermOffsetMap};
use std::collections::BTreeSet;

// ============================================================================
// Outcome
// ============================================================================

/// Result of one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProximityOutcome {
    /// Names of the zones that matched
    pub matched: BTreeSet<String>,
    /// Number of candidate zones that were searched
    pub zones_evaluated: usize,
}

impl ProximityOutcome {
    /// True when at least one zone matched
    pub fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }

    /// True when the zone named `name` matched
    pub fn matched_zone(&self, name: &str) -> bool {
        self.matched.contains(name)
    }

    /// Consume the outcome, returning the matched zone names
    pub fn into_zones(self) -> BTreeSet<String> {
        self.matched
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Evaluates proximity requests
///
/// Holds only configuration; every call takes the document's postings by
/// `&mut` so one evaluator can serve any number of documents.
#[derive(Debug, Clone, Default)]
pub struct ProximityEvaluator {
    config: ProximaConfig,
}

impl ProximityEvaluator {
    /// Create an evaluator with the given configuration
    pub fn new(config: ProximaConfig) -> Self {
        ProximityEvaluator { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &ProximaConfig {
        &self.config
    }

    /// Evaluate `request` against one document's postings
    ///
    /// Missing terms and empty postings produce a non-matching outcome. For
    /// phrase modes the span of every matching zone is recorded in `map`
    /// unless `record_spans` is disabled.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the request fails validation.
    pub fn evaluate(
        &self,
        request: &ProximityRequest,
        map: &mut TermOffsetMap,
    ) -> ProximaResult<ProximityOutcome> {
        request.validate()?;

        let zones = self.candidate_zones(&request.zones, map, &request.terms[0]);
        let threshold_weight = request.mode.threshold_weight();
        let distance = request.effective_distance();

        let mut outcome = ProximityOutcome::default();
        let mut found: Vec<(String, Vec<MatchSpan>)> = Vec::new();

        for zone in &zones {
            outcome.zones_evaluated += 1;
            let Some(slots) = TermSlots::build(map, zone, &request.terms, threshold_weight) else {
                continue;
            };

            match distance {
                Some(distance) => {
                    let scan = scan_window(&slots, distance);
                    if let Some(anchor) = scan.anchor {
                        tracing::trace!(
                            target: "proxima::eval",
                            zone = %zone,
                            anchor,
                            distance,
                            visited = scan.visited,
                            "window match"
                        );
                        outcome.matched.insert(zone.name().to_string());
                    }
                }
                None => {
                    let mut search = PhraseSearch::new(&slots);
                    let spans = search.search(self.config.gather_all_spans);
                    if let Some(first) = spans.first() {
                        tracing::trace!(
                            target: "proxima::eval",
                            zone = %zone,
                            span = %first,
                            spans = spans.len(),
                            visited = search.candidates_visited(),
                            "phrase match"
                        );
                        outcome.matched.insert(zone.name().to_string());
                        if self.config.record_spans {
                            found.push((zone.name().to_string(), spans));
                        }
                    }
                }
            }
        }

        for (zone, spans) in found {
            for span in spans {
                map.record_span(&zone, span.start, span.end);
            }
        }

        tracing::debug!(
            target: "proxima::eval",
            mode = request.mode.name(),
            terms = request.terms.len(),
            zones = %request.zones,
            zones_evaluated = outcome.zones_evaluated,
            matched = outcome.matched.len(),
            "Evaluated proximity request"
        );

        Ok(outcome)
    }

    /// Zones of `first_term` admitted by `filter`
    fn candidate_zones(
        &self,
        filter: &ZoneFilter,
        map: &TermOffsetMap,
        first_term: &str,
    ) -> Vec<Zone> {
        map.zones(first_term)
            .into_iter()
            .filter(|zone| filter.admits(zone, self.config.content_expansion_only))
            .collect()
    }
}
