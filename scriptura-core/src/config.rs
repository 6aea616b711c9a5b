//! Normalizer configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::macron::{DEFAULT_AMBIGUITY_MARKER, DEFAULT_MAX_MACRONS};

/// Largest accepted macron limit: the search enumerates `2^max_macrons` spellings
pub const MAX_MACRONS_LIMIT: usize = 32;

/// Tunables of the normalization pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Marker appended to vowels whose macron could not be resolved
    pub ambiguity_marker: char,
    /// Words with more macrons than this are marked without searching
    pub max_macrons: usize,
    /// Run the cross-line pass after per-line resolution
    pub resolve_linebreaks: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            ambiguity_marker: DEFAULT_AMBIGUITY_MARKER,
            max_macrons: DEFAULT_MAX_MACRONS,
            resolve_linebreaks: true,
        }
    }
}

impl NormalizerConfig {
    /// Parse a configuration from TOML
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_macrons == 0 {
            return Err(ConfigError::Invalid(
                "max_macrons must be greater than 0".into(),
            ));
        }
        if self.max_macrons > MAX_MACRONS_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_macrons must not exceed {MAX_MACRONS_LIMIT}"
            )));
        }
        if self.ambiguity_marker.is_alphanumeric() || self.ambiguity_marker.is_whitespace() {
            return Err(ConfigError::Invalid(format!(
                "ambiguity_marker '{}' would be indistinguishable from text",
                self.ambiguity_marker
            )));
        }
        Ok(())
    }
}
