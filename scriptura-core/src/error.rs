//! Error types for the normalization engine
//!
//! Normalization itself never fails: ambiguities are encoded into the output
//! and structural repairs are healed in place. Errors only arise while loading
//! the external resources (replacement table, dictionary, configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Replacement table loading errors
#[derive(Debug, Error)]
pub enum TableError {
    /// The table file could not be read
    #[error("failed to read replacement table '{path}': {source}")]
    Io {
        /// Path of the table file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The table source contains no header row
    #[error("replacement table has no header row")]
    MissingHeader,

    /// A required column is not named in the header row
    #[error("replacement table has no '{0}' column")]
    MissingColumn(String),

    /// A data row has more fields than the header or lacks the replacement
    #[error("malformed row {row}: {reason}")]
    MalformedRow {
        /// One-based row number in the source
        row: usize,
        /// What is wrong with the row
        reason: String,
    },

    /// A pattern is not a valid regular expression
    #[error("invalid replacement pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compilation error reported by the regex engine
        #[source]
        source: regex::Error,
    },
}

/// Dictionary loading errors
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list could not be read
    #[error("failed to read dictionary '{path}': {source}")]
    Io {
        /// Path of the word list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading from a stream failed
    #[error("failed to read dictionary stream: {0}")]
    Stream(#[from] std::io::Error),

    /// The affix or word file could not be parsed
    #[error("invalid Hunspell dictionary: {0}")]
    Hunspell(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read configuration '{path}': {source}")]
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for the expected schema
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its allowed range
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Crate-level error
#[derive(Debug, Error)]
pub enum Error {
    /// Replacement table error
    #[error(transparent)]
    Table(#[from] TableError),

    /// Dictionary error
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A required collaborator was not supplied to a builder
    #[error("missing component: {0}")]
    MissingComponent(&'static str),
}

/// Result type for fallible engine operations
pub type Result<T> = std::result::Result<T, Error>;
