//! Error types for Proxima
//!
//! A failed match is never an error: missing postings, chains that do not
//! close and zone filters that exclude everything all produce an empty
//! outcome. Errors are reserved for malformed requests and configuration.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for Proxima operations
pub type ProximaResult<T> = std::result::Result<T, ProximaError>;

/// Error types for proximity evaluation
#[derive(Debug, Error)]
pub enum ProximaError {
    /// A request argument is out of range or malformed
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name (e.g. "distance", "terms", "zone")
        name: String,
        /// Human readable reason
        reason: String,
    },

    /// Content function text could not be parsed
    #[error("Parse error at byte {offset}: {message}")]
    Parse {
        /// Byte offset into the input where parsing failed
        offset: usize,
        /// What was expected or found
        message: String,
    },

    /// Configuration could not be read or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading or writing configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ProximaError {
    /// Build an [`ProximaError::InvalidArgument`]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ProximaError::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`ProximaError::Parse`]
    pub fn parse(offset: usize, message: impl Into<String>) -> Self {
        ProximaError::Parse {
            offset,
            message: message.into(),
        }
    }

    /// Build a [`ProximaError::Config`]
    pub fn config(message: impl Into<String>) -> Self {
        ProximaError::Config(message.into())
    }

    /// Returns true for [`ProximaError::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ProximaError::InvalidArgument { .. })
    }
}
