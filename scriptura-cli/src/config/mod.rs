//! Configuration module

use anyhow::{Context, Result};
use scriptura_core::NormalizerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Replacement table configuration
    #[serde(default)]
    pub table: TableConfig,

    /// Dictionary configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Normalization tunables
    #[serde(default)]
    pub normalizer: NormalizerConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Replacement table source
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct TableConfig {
    /// Path of the table file
    pub path: Option<PathBuf>,

    /// Field delimiter
    pub delimiter: char,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: '\t',
        }
    }
}

/// Dictionary source
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct DictionaryConfig {
    /// Path of the Hunspell `.dic` file or a plain word list
    pub path: Option<PathBuf>,

    /// Path of the Hunspell `.aff` file
    pub affix: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Prefix lines with their identifiers
    pub show_identifiers: bool,

    /// Show the transcribed text below each normalized line
    pub show_raw: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            show_identifiers: true,
            show_raw: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    #[serde(default)]
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load a configuration file
    ///
    /// Relative resource paths are taken relative to the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration: {}", path.display()))?;

        config
            .normalizer
            .validate()
            .with_context(|| format!("Invalid configuration: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.table.path,
            &mut self.dictionary.path,
            &mut self.dictionary.affix,
        ]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
