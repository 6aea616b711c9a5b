//! Normalize command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use scriptura_core::{
    DictionaryLookup, HunspellDictionary, LineBreakStats, Normalizer, RawPage, TableLoader,
    WordList,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{read_page, resolve_patterns};
use crate::output::{
    DisplayOptions, JsonFormatter, MarkdownFormatter, NormalizedPage, OutputFormatter,
    TextFormatter, WordsFormatter,
};
use crate::progress::ProgressReporter;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Page files or patterns (supports glob), one page per file
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Replacement table
    #[arg(short, long, value_name = "FILE", env = "SCRIPTURA_TABLE")]
    pub table: Option<PathBuf>,

    /// Hunspell .dic file, or a plain word list
    #[arg(short, long, value_name = "FILE", env = "SCRIPTURA_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Hunspell .aff file (default: the .aff next to the .dic file)
    #[arg(short, long, value_name = "FILE", env = "SCRIPTURA_AFFIX")]
    pub affix: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show the transcribed text of each line
    #[arg(long)]
    pub raw: bool,

    /// Hide line identifiers and break markers
    #[arg(long)]
    pub no_identifiers: bool,

    /// Field delimiter of the replacement table (default: tab)
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Number of worker threads (default: all available)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Normalized lines with their identifiers
    Text,
    /// Pages with lines, tokens and statistics
    Json,
    /// One Markdown table per page
    Markdown,
    /// One word per line with page and line markers
    Words,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting normalization");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let normalizer = self.build_normalizer(&config)?;
        let format = self.output_format(&config)?;
        let options = DisplayOptions {
            identifiers: config.output.show_identifiers && !self.no_identifiers,
            raw: config.output.show_raw || self.raw,
            pretty_json: config.output.pretty_json,
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} page files", files.len());
        let raw_pages = files
            .iter()
            .map(|path| read_page(path))
            .collect::<Result<Vec<_>>>()?;

        let threads = self.threads.unwrap_or(config.performance.worker_threads);
        let pages = self.normalize_all(&normalizer, raw_pages, threads)?;

        let mut totals = LineBreakStats::default();
        let mut formatter = self.create_formatter(format, options)?;
        for page in &pages {
            totals += page.stats;
            formatter.format_page(page)?;
        }
        formatter.finish()?;

        log::info!(
            "Normalized {} pages: {} hyphenated joins, {} dictionary joins, {} rejected, {} lines emptied, {} lines skipped",
            pages.len(),
            totals.hyphenated_joins,
            totals.dictionary_joins,
            totals.rejected_joins,
            totals.emptied_lines,
            totals.skipped_lines
        );
        Ok(())
    }

    /// Load the table and dictionary and wire the normalizer
    fn build_normalizer(&self, config: &CliConfig) -> Result<Normalizer> {
        let table_path = self
            .table
            .as_deref()
            .or(config.table.path.as_deref())
            .ok_or(CliError::MissingResource("replacement table"))?;
        let dictionary_path = self
            .dictionary
            .as_deref()
            .or(config.dictionary.path.as_deref())
            .ok_or(CliError::MissingResource("dictionary"))?;

        let delimiter = self.delimiter.unwrap_or(config.table.delimiter);
        let table = TableLoader::new()
            .delimiter(delimiter)
            .from_file(table_path)
            .with_context(|| format!("Failed to load replacement table: {}", table_path.display()))?;
        let affix_path = self
            .affix
            .as_deref()
            .or(config.dictionary.affix.as_deref());
        let dictionary = load_dictionary(dictionary_path, affix_path)
            .with_context(|| format!("Failed to load dictionary: {}", dictionary_path.display()))?;

        let normalizer = Normalizer::builder()
            .table(table)
            .shared_dictionary(dictionary)
            .config(config.normalizer.clone())
            .build()?;
        Ok(normalizer)
    }

    /// Format from the command line, else from the configuration file
    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Normalize pages on a sized worker pool, keeping input order
    fn normalize_all(
        &self,
        normalizer: &Normalizer,
        raw_pages: Vec<RawPage>,
        threads: usize,
    ) -> Result<Vec<NormalizedPage>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_pages(raw_pages.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create worker pool")?;
        let results = pool.install(|| normalizer.normalize_pages(raw_pages));

        let pages: Vec<NormalizedPage> = results
            .into_iter()
            .map(|(page, stats)| {
                progress.page_completed(page.identifier().unwrap_or_default());
                NormalizedPage::new(normalizer, page, stats)
            })
            .collect();

        progress.finish();
        Ok(pages)
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        options: DisplayOptions,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer = open_output(self.output.as_deref())?;
        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options)),
            OutputFormat::Words => Box::new(WordsFormatter::new(writer, options.identifiers)),
        })
    }
}

/// Load a Hunspell dictionary when an affix file is known, else a word list
fn load_dictionary(
    words_path: &Path,
    affix_path: Option<&Path>,
) -> Result<Arc<dyn DictionaryLookup>> {
    let sibling = words_path.with_extension("aff");
    let affix_path = match affix_path {
        Some(path) => Some(path),
        None if sibling.is_file() => Some(sibling.as_path()),
        None => None,
    };

    Ok(match affix_path {
        Some(affix_path) => Arc::new(HunspellDictionary::from_files(affix_path, words_path)?),
        None => {
            log::info!("No affix file for {}, reading a plain word list", words_path.display());
            Arc::new(WordList::from_file(words_path)?)
        }
    })
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    })
}
