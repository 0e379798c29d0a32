//! Evaluation configuration via `proxima.toml`
//!
//! Every setting has a default, so an empty file (or no file at all) yields
//! the standard behavior.

use crate::error::{ProximaError, ProximaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "proxima.toml";

/// Default name of the variable that binds the term offset map in content function calls
pub const DEFAULT_TERM_OFFSET_MAP_VARIABLE: &str = "termOffsetMap";

/// Evaluation configuration loaded from `proxima.toml`.
///
/// # Example
///
/// ```toml
/// term_offset_map_variable = "termOffsetMap"
/// content_expansion_only = true
/// gather_all_spans = false
/// record_spans = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProximaConfig {
    /// Identifier that separates leading arguments from terms in content function calls
    #[serde(default = "default_variable")]
    pub term_offset_map_variable: String,

    /// When no zone is named, only evaluate content expansion zones
    #[serde(default = "default_true")]
    pub content_expansion_only: bool,

    /// Record every phrase match instead of only the earliest one per zone
    #[serde(default)]
    pub gather_all_spans: bool,

    /// Write phrase spans into the term offset map at all
    #[serde(default = "default_true")]
    pub record_spans: bool,
}

fn default_variable() -> String {
    DEFAULT_TERM_OFFSET_MAP_VARIABLE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ProximaConfig {
    fn default() -> Self {
        Self {
            term_offset_map_variable: default_variable(),
            content_expansion_only: true,
            gather_all_spans: false,
            record_spans: true,
        }
    }
}

impl ProximaConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Proxima evaluation configuration
#
# Identifier separating leading arguments (zone, distance, threshold)
# from terms in content function calls.
term_offset_map_variable = "termOffsetMap"

# When a call names no zone, only evaluate zones whose field is a
# content expansion field (default: true).
content_expansion_only = true

# Record every phrase match instead of only the earliest one per zone
# (default: false).
gather_all_spans = false

# Record phrase spans for highlighting (default: true).
record_spans = true
"#
    }

    /// Parse and validate config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not valid TOML, has unknown keys, or
    /// names an invalid variable.
    pub fn from_toml_str(content: &str) -> ProximaResult<Self> {
        let config: ProximaConfig = toml::from_str(content)
            .map_err(|e| ProximaError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> ProximaResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProximaError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            target: "proxima::config",
            path = %path.display(),
            gather_all_spans = config.gather_all_spans,
            content_expansion_only = config.content_expansion_only,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> ProximaResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> ProximaResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProximaError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that the variable name is a plain identifier.
    pub fn validate(&self) -> ProximaResult<()> {
        let var = &self.term_offset_map_variable;
        let mut chars = var.chars();
        let valid = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        if valid {
            Ok(())
        } else {
            Err(ProximaError::config(format!(
                "term_offset_map_variable '{}' is not an identifier",
                var
            )))
        }
    }
}
