//! Term occurrence positions
//!
//! A [`Position`] is one occurrence of a term in a zone's token stream.
//! Duplicate tokens that were collapsed during indexing are folded into the
//! following position as `prev_skips`, so a position covers the closed
//! interval `[offset - prev_skips, offset]`. Every distance computation in
//! the evaluator works on that interval, never on the raw offset alone.

use serde::{Deserialize, Serialize};

/// Scale between a position score (a log probability) and its stored weight
const SCORE_SCALE: f64 = 10_000_000.0;

/// Convert a position score (log probability, `<= 0` for real scores) into
/// the stored term weight. Scores closer to zero produce smaller weights, so
/// "at least this relevant" is `weight <= threshold_weight`.
///
/// # Example
///
/// ```
/// use proxima_core::position_score_to_weight;
///
/// assert_eq!(position_score_to_weight(-0.2), 2_000_000);
/// assert!(position_score_to_weight(-0.0001) < position_score_to_weight(-0.2));
/// ```
pub fn position_score_to_weight(score: f32) -> i64 {
    (-(score as f64) * SCORE_SCALE).round() as i64
}

/// Inverse of [`position_score_to_weight`]
pub fn weight_to_position_score(weight: i64) -> f32 {
    (-(weight as f64) / SCORE_SCALE) as f32
}

/// One occurrence of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Token offset in the zone's token stream
    pub offset: u32,

    /// Number of collapsed tokens immediately preceding `offset`
    #[serde(default)]
    pub prev_skips: u32,

    /// Term weight (see [`position_score_to_weight`]); `None` when unscored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,

    /// Whether a zero-distance hop may start from this position
    #[serde(default = "default_zero_offset_match")]
    pub zero_offset_match: bool,
}

fn default_zero_offset_match() -> bool {
    true
}

impl Position {
    /// Create an unscored position with no skips that may anchor zero-distance hops
    pub fn new(offset: u32) -> Self {
        Position {
            offset,
            prev_skips: 0,
            score: None,
            zero_offset_match: true,
        }
    }

    /// Builder: set the number of collapsed preceding tokens
    pub fn with_skips(mut self, prev_skips: u32) -> Self {
        self.prev_skips = prev_skips;
        self
    }

    /// Builder: set the position score (a log probability)
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(position_score_to_weight(score));
        self
    }

    /// Builder: set the stored term weight directly
    pub fn with_weight(mut self, weight: i64) -> Self {
        self.score = Some(weight);
        self
    }

    /// Builder: allow or forbid zero-distance hops from this position
    pub fn with_zero_offset_match(mut self, allowed: bool) -> Self {
        self.zero_offset_match = allowed;
        self
    }

    /// Earliest offset this position reaches back to once skips are applied
    #[inline]
    pub fn low_offset(&self) -> u32 {
        self.offset.saturating_sub(self.prev_skips)
    }

    /// The position score as a log probability, if scored
    pub fn position_score(&self) -> Option<f32> {
        self.score.map(weight_to_position_score)
    }

    /// True when this position is at least as relevant as `threshold_weight`.
    /// Unscored positions always pass.
    #[inline]
    pub fn meets_threshold(&self, threshold_weight: i64) -> bool {
        self.score.map_or(true, |w| w <= threshold_weight)
    }
}
