//! Convenience calls mirroring the content function convention
//!
//! Each call builds a [`ProximityRequest`], evaluates it with the default
//! configuration and returns the matched zone names. An empty set means no
//! match.

use crate::evaluator::ProximityEvaluator;
use crate::mode::ProximityRequest;
use proxima_core::{ProximaResult, ZoneFilter};
use proxima_postings::TermOffsetMap;
use std::collections::BTreeSet;

fn run(
    request: ProximityRequest,
    zones: ZoneFilter,
    map: &mut TermOffsetMap,
) -> ProximaResult<BTreeSet<String>> {
    ProximityEvaluator::default()
        .evaluate(&request.with_zones(zones), map)
        .map(|outcome| outcome.into_zones())
}

/// Zones where `terms` occur, in any order, within `distance` tokens
pub fn within<I, S>(
    zones: ZoneFilter,
    distance: u32,
    map: &mut TermOffsetMap,
    terms: I,
) -> ProximaResult<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run(ProximityRequest::within(distance, terms), zones, map)
}

/// Zones where `terms` occupy consecutive tokens, in any order
pub fn adjacent<I, S>(
    zones: ZoneFilter,
    map: &mut TermOffsetMap,
    terms: I,
) -> ProximaResult<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run(ProximityRequest::adjacent(terms), zones, map)
}

/// Zones where `terms` occur as a phrase; spans are recorded in `map`
pub fn phrase<I, S>(
    zones: ZoneFilter,
    map: &mut TermOffsetMap,
    terms: I,
) -> ProximaResult<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run(ProximityRequest::phrase(terms), zones, map)
}

/// Like [`phrase`], using only positions scoring at least `threshold`
pub fn scored_phrase<I, S>(
    zones: ZoneFilter,
    threshold: f32,
    map: &mut TermOffsetMap,
    terms: I,
) -> ProximaResult<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run(ProximityRequest::scored_phrase(threshold, terms), zones, map)
}
