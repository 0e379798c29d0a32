//! Evaluation modes and requests
//!
//! A [`ProximityRequest`] bundles what one content function call asks for:
//! the [`Mode`], the [`ZoneFilter`] and the ordered term list. Requests are
//! validated before any postings are touched.

use proxima_core::{position_score_to_weight, ProximaError, ProximaResult, ZoneFilter};
use std::fmt;

/// How the terms of a request must be arranged
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Terms occupy consecutive tokens, in any order
    Adjacent,
    /// Terms fit in a window of `distance` tokens, in any order
    Within {
        /// Largest allowed skip-adjusted spread
        distance: u32,
    },
    /// Terms appear in order, each directly after the previous one
    Phrase,
    /// [`Mode::Phrase`] over positions at least as relevant as `threshold`
    ScoredPhrase {
        /// Minimum position score (a log probability)
        threshold: f32,
    },
}

impl Mode {
    /// Function name used in content function calls
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Adjacent => "adjacent",
            Mode::Within { .. } => "within",
            Mode::Phrase => "phrase",
            Mode::ScoredPhrase { .. } => "scoredPhrase",
        }
    }

    /// True for phrase modes, which match in term order and record spans
    pub fn is_ordered(&self) -> bool {
        matches!(self, Mode::Phrase | Mode::ScoredPhrase { .. })
    }

    /// Distance argument, for `within`
    pub fn distance(&self) -> Option<u32> {
        match self {
            Mode::Within { distance } => Some(*distance),
            _ => None,
        }
    }

    /// Threshold argument, for `scoredPhrase`
    pub fn threshold(&self) -> Option<f32> {
        match self {
            Mode::ScoredPhrase { threshold } => Some(*threshold),
            _ => None,
        }
    }

    /// Threshold converted to the stored term weight form
    pub fn threshold_weight(&self) -> Option<i64> {
        self.threshold().map(position_score_to_weight)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One evaluation request
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityRequest {
    /// Arrangement the terms must satisfy
    pub mode: Mode,
    /// Zones to evaluate
    pub zones: ZoneFilter,
    /// Terms in query order; repeats are meaningful
    pub terms: Vec<String>,
}

impl ProximityRequest {
    /// Create a request over every admitted zone
    pub fn new<I, S>(mode: Mode, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProximityRequest {
            mode,
            zones: ZoneFilter::All,
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// `within(distance, terms)`
    pub fn within<I, S>(distance: u32, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Mode::Within { distance }, terms)
    }

    /// `adjacent(terms)`
    pub fn adjacent<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Mode::Adjacent, terms)
    }

    /// `phrase(terms)`
    pub fn phrase<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Mode::Phrase, terms)
    }

    /// `scoredPhrase(threshold, terms)`
    pub fn scored_phrase<I, S>(threshold: f32, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Mode::ScoredPhrase { threshold }, terms)
    }

    /// Builder: restrict the zones evaluated
    pub fn with_zones(mut self, zones: ZoneFilter) -> Self {
        self.zones = zones;
        self
    }

    /// Spread allowed by the unordered modes
    ///
    /// `adjacent` over n terms is `within(n - 1)`. Ordered modes have no
    /// window and return `None`.
    pub fn effective_distance(&self) -> Option<u32> {
        match self.mode {
            Mode::Within { distance } => Some(distance),
            Mode::Adjacent => Some(self.terms.len().saturating_sub(1) as u32),
            Mode::Phrase | Mode::ScoredPhrase { .. } => None,
        }
    }

    /// Check arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a zero distance, fewer than two terms,
    /// an empty term, a non-finite threshold, or a malformed zone filter.
    pub fn validate(&self) -> ProximaResult<()> {
        match self.mode {
            Mode::Within { distance: 0 } => {
                return Err(ProximaError::invalid_argument(
                    "distance",
                    "distance must be positive",
                ));
            }
            Mode::ScoredPhrase { threshold } if !threshold.is_finite() => {
                return Err(ProximaError::invalid_argument(
                    "threshold",
                    format!("threshold must be finite, got {}", threshold),
                ));
            }
            _ => {}
        }

        if self.terms.len() < 2 {
            return Err(ProximaError::invalid_argument(
                "terms",
                format!(
                    "{} requires at least two terms, got {}",
                    self.mode.name(),
                    self.terms.len()
                ),
            ));
        }
        if self.terms.iter().any(String::is_empty) {
            return Err(ProximaError::invalid_argument(
                "terms",
                "terms must not be empty",
            ));
        }

        self.zones.validate()
    }
}
