//! Unordered window search for `within` and `adjacent`
//!
//! A match picks one position per query slot, with repeated terms taking
//! distinct positions, such that the skip-adjusted spread
//! `max(low_offset) - min(offset)` is at most the distance.
//!
//! Every offset present in the zone is tried as the window anchor in
//! increasing order. For an anchor `a` a term qualifies when it has as many
//! positions with `offset >= a` and `low_offset <= a + distance` as the
//! query has slots for it. Per-term cursors only move forward, and a scan
//! stops once no later position of the term has a `low_offset` inside the
//! window.

use crate::slots::TermSlots;

/// Outcome of a window scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowScan {
    /// Smallest anchor whose window holds every slot
    pub anchor: Option<u32>,
    /// Positions examined across every anchor
    pub visited: usize,
}

/// Find the smallest anchor offset whose window holds every slot
pub fn find_window(slots: &TermSlots, distance: u32) -> Option<u32> {
    scan_window(slots, distance).anchor
}

/// [`find_window`], also reporting how many positions were examined
pub fn scan_window(slots: &TermSlots, distance: u32) -> WindowScan {
    let mut scan = WindowScan {
        anchor: None,
        visited: 0,
    };
    let terms = slots.distinct_terms();
    if terms == 0 {
        return scan;
    }

    let mut anchors: Vec<u32> = (0..terms)
        .flat_map(|t| slots.term_positions(t).iter().map(|p| p.offset))
        .collect();
    anchors.sort_unstable();
    anchors.dedup();

    let mut cursors = vec![0usize; terms];
    for anchor in anchors {
        let bound = anchor.saturating_add(distance);
        let visited = &mut scan.visited;
        let fits = (0..terms).all(|term| {
            let positions = slots.term_positions(term);
            let cursor = &mut cursors[term];
            while *cursor < positions.len() && positions[*cursor].offset < anchor {
                *cursor += 1;
            }

            let needed = slots.multiplicity(term);
            let mut count = 0;
            for (idx, position) in positions.iter().enumerate().skip(*cursor) {
                if slots.min_low_from(term, idx) > bound {
                    break;
                }
                *visited += 1;
                if position.low_offset() <= bound {
                    count += 1;
                    if count >= needed {
                        return true;
                    }
                }
            }
            false
        });

        if fits {
            scan.anchor = Some(anchor);
            return scan;
        }
    }
    scan
}
