//! Zones and zone filters
//!
//! A [`Zone`] identifies where positions were recorded: a field name within
//! one document instance. Two instances of the same field in different
//! documents are different zones and are never merged or evaluated together.

use crate::error::{ProximaError, ProximaResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Synthetic zone name under which spans from every zone are visible
pub const ANY_FIELD: &str = "_ANYFIELD_";

// ============================================================================
// Zone
// ============================================================================

/// A (field name, document instance) pair
///
/// Equality, hashing and ordering use `(name, document_id)` only. The
/// `content_expansion` flag is carried along for filtering but two zones that
/// differ only in that flag are the same map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    name: String,
    content_expansion: bool,
    document_id: String,
}

impl Zone {
    /// Create a zone
    pub fn new(
        name: impl Into<String>,
        content_expansion: bool,
        document_id: impl Into<String>,
    ) -> Self {
        Zone {
            name: name.into(),
            content_expansion,
            document_id: document_id.into(),
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the field is configured for content expansion
    pub fn is_content_expansion(&self) -> bool {
        self.content_expansion
    }

    /// Composite identity of the document instance
    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}

impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.document_id == other.document_id
    }
}

impl Eq for Zone {}

impl Hash for Zone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.document_id.hash(state);
    }
}

impl PartialOrd for Zone {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Zone {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.document_id.cmp(&other.document_id))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.document_id.escape_debug())
    }
}

// ============================================================================
// ZoneFilter
// ============================================================================

/// Which zones an evaluation considers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZoneFilter {
    /// Every zone that carries postings for all terms
    #[default]
    All,
    /// Only zones with this field name
    Named(String),
    /// Zones whose field name is any of these
    AnyOf(BTreeSet<String>),
}

impl ZoneFilter {
    /// Filter admitting a single field name
    pub fn named(name: impl Into<String>) -> Self {
        ZoneFilter::Named(name.into())
    }

    /// Build a filter from a list of field names
    ///
    /// One name produces [`ZoneFilter::Named`], several produce
    /// [`ZoneFilter::AnyOf`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the list is empty or a name is blank.
    pub fn from_names<I, S>(names: I) -> ProximaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        let filter = match names.len() {
            0 => {
                return Err(ProximaError::invalid_argument(
                    "zone",
                    "zone list must not be empty",
                ))
            }
            1 => ZoneFilter::Named(names.into_iter().next().unwrap_or_default()),
            _ => ZoneFilter::AnyOf(names),
        };
        filter.validate()?;
        Ok(filter)
    }

    /// Check that every named zone is non-blank and sets are non-empty
    pub fn validate(&self) -> ProximaResult<()> {
        match self {
            ZoneFilter::All => Ok(()),
            ZoneFilter::Named(name) => check_zone_name(name),
            ZoneFilter::AnyOf(names) => {
                if names.is_empty() {
                    return Err(ProximaError::invalid_argument(
                        "zone",
                        "zone list must not be empty",
                    ));
                }
                names.iter().try_for_each(|name| check_zone_name(name))
            }
        }
    }

    /// True for [`ZoneFilter::All`]
    pub fn is_all(&self) -> bool {
        matches!(self, ZoneFilter::All)
    }

    /// Whether `zone` takes part in an evaluation under this filter
    ///
    /// With [`ZoneFilter::All`] and `content_expansion_only`, zones whose field
    /// is not a content expansion field are excluded. Named filters admit
    /// every zone with a matching name.
    pub fn admits(&self, zone: &Zone, content_expansion_only: bool) -> bool {
        match self {
            ZoneFilter::All => !content_expansion_only || zone.is_content_expansion(),
            ZoneFilter::Named(name) => zone.name() == name,
            ZoneFilter::AnyOf(names) => names.contains(zone.name()),
        }
    }

    /// Field names named by this filter; empty for [`ZoneFilter::All`]
    pub fn names(&self) -> Vec<&str> {
        match self {
            ZoneFilter::All => Vec::new(),
            ZoneFilter::Named(name) => vec![name.as_str()],
            ZoneFilter::AnyOf(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

fn check_zone_name(name: &str) -> ProximaResult<()> {
    if name.trim().is_empty() {
        Err(ProximaError::invalid_argument(
            "zone",
            "zone name must not be blank",
        ))
    } else {
        Ok(())
    }
}

impl fmt::Display for ZoneFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneFilter::All => f.write_str("*"),
            ZoneFilter::Named(name) => f.write_str(name),
            ZoneFilter::AnyOf(names) => {
                f.write_str("(")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" || ")?;
                    }
                    f.write_str(name)?;
                }
                f.write_str(")")
            }
        }
    }
}
