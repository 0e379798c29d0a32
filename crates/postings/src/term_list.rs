//! Term posting lists
//!
//! A [`TermFrequencyList`] holds every position of one term, grouped by the
//! zone it was seen in. Positions within a zone are keyed by offset, which
//! keeps them sorted and makes re-insertion of the same offset a no-op.

use proxima_core::{Position, Zone};
use std::collections::BTreeMap;

/// Positions of one term across zones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencyList {
    zones: BTreeMap<Zone, BTreeMap<u32, Position>>,
}

impl TermFrequencyList {
    /// Create an empty list
    pub fn new() -> Self {
        TermFrequencyList {
            zones: BTreeMap::new(),
        }
    }

    /// Create a list holding positions for a single zone
    pub fn from_zone<I>(zone: Zone, positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut list = Self::new();
        list.put(zone, positions);
        list
    }

    /// Add positions for `zone`, merging with any already present
    ///
    /// An offset that is already stored keeps its first position; inserting
    /// the same data twice leaves the list unchanged. A zone is registered
    /// even when `positions` is empty. Zones compare by name and document,
    /// so the `content_expansion` flag of the first insertion is the one kept.
    pub fn put<I>(&mut self, zone: Zone, positions: I)
    where
        I: IntoIterator<Item = Position>,
    {
        let entry = self.zones.entry(zone).or_default();
        for pos in positions {
            entry.entry(pos.offset).or_insert(pos);
        }
    }

    /// Merge every zone of `other` into this list
    pub fn merge(&mut self, other: TermFrequencyList) {
        for (zone, positions) in other.zones {
            self.put(zone, positions.into_values());
        }
    }

    /// Positions in `zone`, ordered by offset; empty when the zone is unknown
    pub fn positions(&self, zone: &Zone) -> Vec<Position> {
        self.iter_positions(zone).copied().collect()
    }

    /// Iterate positions in `zone` in offset order
    pub fn iter_positions<'a>(&'a self, zone: &Zone) -> impl Iterator<Item = &'a Position> + 'a {
        self.zones
            .get(zone)
            .into_iter()
            .flat_map(|positions| positions.values())
    }

    /// True when `zone` holds at least one position
    pub fn has_positions(&self, zone: &Zone) -> bool {
        self.zones.get(zone).map_or(false, |p| !p.is_empty())
    }

    /// Zones this term was registered in, in zone order
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.keys()
    }

    /// Number of zones
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Total number of positions across zones
    pub fn position_count(&self) -> usize {
        self.zones.values().map(BTreeMap::len).sum()
    }

    /// True when no zone holds any position
    pub fn is_empty(&self) -> bool {
        self.zones.values().all(BTreeMap::is_empty)
    }

    /// Largest `prev_skips` among the positions in `zone`
    pub fn max_skips(&self, zone: &Zone) -> u32 {
        self.iter_positions(zone)
            .map(|p| p.prev_skips)
            .max()
            .unwrap_or(0)
    }
}
