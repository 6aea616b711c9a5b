//! Normalization facade and builder
//!
//! [`Normalizer`] wires the resolvers together around one shared
//! [`ReplacementTable`] and one shared [`DictionaryLookup`]:
//!
//! raw line → abbreviations → tokens → interior macrons → page →
//! line breaks → rendering.

use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::abbreviation::AbbreviationResolver;
use crate::config::NormalizerConfig;
use crate::dictionary::DictionaryLookup;
use crate::error::{Error, Result};
use crate::joiner::WordJoiner;
use crate::linebreak::{LineBreakResolver, LineBreakStats};
use crate::macron::MacronResolver;
use crate::spacer::AutoSpacer;
use crate::table::ReplacementTable;
use crate::token::{Line, Page};
use crate::tokenizer::Tokenizer;

/// One line as delivered by the transcription source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLine {
    /// Opaque identifier, kept unchanged
    pub identifier: String,
    /// Diplomatic text of the line
    pub text: String,
}

impl RawLine {
    /// Create a raw line
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }
}

/// One page as delivered by the transcription source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    /// Optional page identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Lines in reading order
    pub lines: Vec<RawLine>,
}

impl RawPage {
    /// Create a page from its lines
    pub fn new(lines: Vec<RawLine>) -> Self {
        Self {
            identifier: None,
            lines,
        }
    }

    /// Attach a page identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

/// Builder for [`Normalizer`]
#[derive(Debug, Default)]
pub struct NormalizerBuilder {
    table: Option<Arc<ReplacementTable>>,
    dictionary: Option<Arc<dyn DictionaryLookup>>,
    config: NormalizerConfig,
}

impl NormalizerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replacement table
    pub fn table(mut self, table: ReplacementTable) -> Self {
        self.table = Some(Arc::new(table));
        self
    }

    /// Set a table shared with other normalizers
    pub fn shared_table(mut self, table: Arc<ReplacementTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Set the dictionary
    pub fn dictionary(mut self, dictionary: impl DictionaryLookup + 'static) -> Self {
        self.dictionary = Some(Arc::new(dictionary));
        self
    }

    /// Set a dictionary shared with other normalizers
    pub fn shared_dictionary(mut self, dictionary: Arc<dyn DictionaryLookup>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Set the configuration
    pub fn config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the normalizer
    pub fn build(self) -> Result<Normalizer> {
        let table = self.table.ok_or(Error::MissingComponent("replacement table"))?;
        let dictionary = self.dictionary.ok_or(Error::MissingComponent("dictionary"))?;
        self.config.validate()?;

        let abbreviations = AbbreviationResolver::new(table);
        let macrons = MacronResolver::new(dictionary.clone())
            .with_marker(self.config.ambiguity_marker)
            .with_max_macrons(self.config.max_macrons);
        let joiner = WordJoiner::new(abbreviations.clone(), macrons.clone(), dictionary);

        Ok(Normalizer {
            abbreviations,
            tokenizer: Tokenizer::new(),
            macrons,
            linebreaks: LineBreakResolver::new(joiner),
            spacer: AutoSpacer::new(),
            config: self.config,
        })
    }
}

/// Normalizes pages of diplomatic transcription
///
/// Cheap to share across threads: all resources are behind `Arc`.
#[derive(Debug, Clone)]
pub struct Normalizer {
    abbreviations: AbbreviationResolver,
    tokenizer: Tokenizer,
    macrons: MacronResolver,
    linebreaks: LineBreakResolver,
    spacer: AutoSpacer,
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a builder
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::new()
    }

    /// Configuration in use
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Abbreviation resolver
    pub fn abbreviations(&self) -> &AbbreviationResolver {
        &self.abbreviations
    }

    /// Macron resolver
    pub fn macrons(&self) -> &MacronResolver {
        &self.macrons
    }

    /// Word joiner used by the line-break pass
    pub fn joiner(&self) -> &WordJoiner {
        self.linebreaks.joiner()
    }

    /// Resolve a single line in isolation
    ///
    /// Boundary words are left as transcribed; they are handled by the
    /// line-break pass of [`Normalizer::normalize_page`].
    pub fn prepare_line(&self, raw: RawLine) -> Line {
        let resolved = self.abbreviations.resolve(&raw.text);
        let tokens = self.tokenizer.tokenize(&resolved);
        let tokens = self.macrons.resolve_macrons(tokens);
        Line::with_text(raw.identifier, raw.text, resolved, tokens)
    }

    /// Normalize the lines of one page
    pub fn normalize_page<I>(&self, lines: I) -> Page
    where
        I: IntoIterator<Item = RawLine>,
    {
        self.normalize_page_with_stats(RawPage::new(lines.into_iter().collect()))
            .0
    }

    /// Normalize a page and report what the line-break pass did
    pub fn normalize_page_with_stats(&self, raw: RawPage) -> (Page, LineBreakStats) {
        let lines = raw.lines.into_iter().map(|line| self.prepare_line(line)).collect();
        let mut page = Page::new(lines);
        if let Some(identifier) = raw.identifier {
            page = page.with_identifier(identifier);
        }

        let stats = if self.config.resolve_linebreaks {
            self.linebreaks.resolve_in_place(&mut page)
        } else {
            LineBreakStats::default()
        };

        log::debug!(
            "Normalized page {} ({} lines, {} joins)",
            page.identifier().unwrap_or("<unnamed>"),
            page.len(),
            stats.joins()
        );
        (page, stats)
    }

    /// Normalize independent pages
    ///
    /// With the `parallel` feature, pages are processed concurrently. Output
    /// order always matches input order.
    pub fn normalize_pages(&self, pages: Vec<RawPage>) -> Vec<(Page, LineBreakStats)> {
        #[cfg(feature = "parallel")]
        let results = pages
            .into_par_iter()
            .map(|page| self.normalize_page_with_stats(page))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results = pages
            .into_iter()
            .map(|page| self.normalize_page_with_stats(page))
            .collect();

        results
    }

    /// Render a line as readable text
    pub fn render(&self, line: &Line) -> String {
        self.spacer.render(line)
    }

    /// Render every line of a page
    pub fn render_page(&self, page: &Page) -> Vec<String> {
        page.lines().iter().map(|line| self.render(line)).collect()
    }
}
