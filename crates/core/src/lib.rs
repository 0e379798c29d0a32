//! Core types for Proxima
//!
//! This crate defines the foundational types used by the postings index and
//! the proximity evaluator:
//! - Position: a single term occurrence with skip, score and anchor metadata
//! - Zone: a (field name, document instance) pair that positions are tracked in
//! - ZoneFilter: which zones an evaluation considers
//! - Error: error type hierarchy
//! - Config: `proxima.toml` evaluation settings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod position;
pub mod zone;

pub use config::{ProximaConfig, CONFIG_FILE_NAME, DEFAULT_TERM_OFFSET_MAP_VARIABLE};
pub use error::{ProximaError, ProximaResult};
pub use position::{position_score_to_weight, weight_to_position_score, Position};
pub use zone::{Zone, ZoneFilter, ANY_FIELD};
