//! Per-zone view of the query terms
//!
//! [`TermSlots`] resolves the request's terms against one zone of a
//! [`TermOffsetMap`]. Repeated terms share one position list; each slot of
//! the query points at the list of its term.

use proxima_core::{Position, Zone};
use proxima_postings::TermOffsetMap;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Positions of every query term within one zone
#[derive(Debug, Clone)]
pub struct TermSlots {
    /// Offset-ordered positions per distinct term
    lists: Vec<Vec<Position>>,
    /// Per distinct term, the smallest `low_offset` at or after each index
    min_low_from: Vec<Vec<u32>>,
    /// How many slots use each distinct term
    multiplicity: Vec<usize>,
    /// Distinct term index of each query slot
    slot_terms: SmallVec<[usize; 8]>,
}

impl TermSlots {
    /// Resolve `terms` in `zone`
    ///
    /// With a threshold weight, positions that fail it are dropped. Returns
    /// `None` when some term has no usable position in the zone.
    pub fn build(
        map: &TermOffsetMap,
        zone: &Zone,
        terms: &[String],
        threshold_weight: Option<i64>,
    ) -> Option<Self> {
        let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
        let mut lists: Vec<Vec<Position>> = Vec::new();
        let mut multiplicity: Vec<usize> = Vec::new();
        let mut slot_terms: SmallVec<[usize; 8]> = SmallVec::with_capacity(terms.len());

        for term in terms {
            let id = match ids.get(term.as_str()) {
                Some(&id) => id,
                None => {
                    let positions: Vec<Position> = map
                        .term_frequency_list(term)?
                        .iter_positions(zone)
                        .filter(|p| threshold_weight.map_or(true, |w| p.meets_threshold(w)))
                        .copied()
                        .collect();
                    if positions.is_empty() {
                        return None;
                    }
                    let id = lists.len();
                    lists.push(positions);
                    multiplicity.push(0);
                    ids.insert(term.as_str(), id);
                    id
                }
            };
            multiplicity[id] += 1;
            slot_terms.push(id);
        }

        let min_low_from = lists.iter().map(|list| suffix_min_low(list)).collect();

        Some(TermSlots {
            lists,
            min_low_from,
            multiplicity,
            slot_terms,
        })
    }

    /// Number of query slots
    pub fn len(&self) -> usize {
        self.slot_terms.len()
    }

    /// True when the query has no slots
    pub fn is_empty(&self) -> bool {
        self.slot_terms.is_empty()
    }

    /// Number of distinct terms
    pub fn distinct_terms(&self) -> usize {
        self.lists.len()
    }

    /// Distinct term index of `slot`
    #[inline]
    pub fn term_of(&self, slot: usize) -> usize {
        self.slot_terms[slot]
    }

    /// Positions of distinct term `term`
    #[inline]
    pub fn term_positions(&self, term: usize) -> &[Position] {
        &self.lists[term]
    }

    /// Positions for query slot `slot`
    #[inline]
    pub fn slot_positions(&self, slot: usize) -> &[Position] {
        &self.lists[self.slot_terms[slot]]
    }

    /// Smallest `low_offset` among positions `idx..` of distinct term `term`
    ///
    /// `u32::MAX` past the end of the list. Once this exceeds a scan's reach
    /// no later position of the term can qualify.
    #[inline]
    pub fn min_low_from(&self, term: usize, idx: usize) -> u32 {
        self.min_low_from[term].get(idx).copied().unwrap_or(u32::MAX)
    }

    /// Number of slots using distinct term `term`
    #[inline]
    pub fn multiplicity(&self, term: usize) -> usize {
        self.multiplicity[term]
    }

    /// True when any slot in `from..=to` uses distinct term `term`
    pub fn run_uses_term(&self, from: usize, to: usize, term: usize) -> bool {
        self.slot_terms[from..=to].contains(&term)
    }
}

fn suffix_min_low(positions: &[Position]) -> Vec<u32> {
    let mut mins = vec![u32::MAX; positions.len()];
    let mut min = u32::MAX;
    for (i, position) in positions.iter().enumerate().rev() {
        min = min.min(position.low_offset());
        mins[i] = min;
    }
    mins
}
