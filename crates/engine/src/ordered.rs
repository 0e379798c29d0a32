//! Ordered chain search for phrase modes
//!
//! A chain binds one position to every query slot such that each hop
//! `prev -> next` satisfies:
//! - `next.offset >= prev.offset`
//! - `next.low_offset() <= prev.offset + 1`
//! - a zero-distance hop (`next.low_offset() <= prev.offset`) starts from a
//!   position with `zero_offset_match`
//! - within a run of equal offsets no term binds twice, since that would be
//!   the same position
//!
//! Different terms at one offset are accepted regardless of query order. That
//! admits the reversed-order match at a shared offset (`phrase(cat, dog)` with
//! both at 3) in exchange for never missing synonym tokens.
//!
//! The search is depth first over start positions in offset order. A state
//! is `(slot, position index, start of the current equal-offset run)`; its
//! outcome does not depend on how it was reached, so failed states are kept
//! in an [`FxHashSet`] and never expanded twice. A candidate scan stops as
//! soon as no later position of the term has a `low_offset` within reach, so
//! a single far position with a large skip count does not widen every scan.

use crate::slots::TermSlots;
use proxima_postings::MatchSpan;
use rustc_hash::FxHashSet;

/// Memoised depth-first chain search over one zone
pub struct PhraseSearch<'a> {
    slots: &'a TermSlots,
    failed: FxHashSet<(usize, usize, usize)>,
    visited: usize,
}

impl<'a> PhraseSearch<'a> {
    /// Create a search over `slots`
    pub fn new(slots: &'a TermSlots) -> Self {
        PhraseSearch {
            slots,
            failed: FxHashSet::default(),
            visited: 0,
        }
    }

    /// Candidate positions examined so far
    pub fn candidates_visited(&self) -> usize {
        self.visited
    }

    /// Earliest matching chain, if any
    pub fn first_match(&mut self) -> Option<MatchSpan> {
        self.search(false).into_iter().next()
    }

    /// One span per start position that begins a chain, in offset order
    pub fn all_matches(&mut self) -> Vec<MatchSpan> {
        self.search(true)
    }

    /// Run the search; stop after the first span unless `gather_all`
    pub fn search(&mut self, gather_all: bool) -> Vec<MatchSpan> {
        let mut spans = Vec::new();
        if self.slots.is_empty() {
            return spans;
        }

        let starts = self.slots.slot_positions(0);
        for (idx, start) in starts.iter().enumerate() {
            if let Some(end) = self.extend(0, idx, 0) {
                spans.push(MatchSpan::new(start.offset, end));
                if !gather_all {
                    break;
                }
            }
        }
        spans
    }

    /// Try to complete a chain whose `slot` is bound to position `idx`.
    /// Returns the offset of the last position on success.
    fn extend(&mut self, slot: usize, idx: usize, run_start: usize) -> Option<u32> {
        let current = self.slots.slot_positions(slot)[idx];
        let next_slot = slot + 1;
        if next_slot == self.slots.len() {
            return Some(current.offset);
        }

        let key = (slot, idx, run_start);
        if self.failed.contains(&key) {
            return None;
        }

        let next_term = self.slots.term_of(next_slot);
        let candidates = self.slots.slot_positions(next_slot);
        let reach = current.offset.saturating_add(1);
        let first = candidates.partition_point(|p| p.offset < current.offset);

        for (next_idx, next) in candidates.iter().enumerate().skip(first) {
            if self.slots.min_low_from(next_term, next_idx) > reach {
                break;
            }
            self.visited += 1;
            let low = next.low_offset();
            if low > reach {
                continue;
            }
            if low <= current.offset && !current.zero_offset_match {
                continue;
            }

            let next_run = if next.offset == current.offset {
                if self.slots.run_uses_term(run_start, slot, next_term) {
                    continue;
                }
                run_start
            } else {
                next_slot
            };

            if let Some(end) = self.extend(next_slot, next_idx, next_run) {
                return Some(end);
            }
        }

        self.failed.insert(key);
        None
    }
}
