//! Output formatting module

use anyhow::Result;
use scriptura_core::{LineBreakStats, Normalizer, Page};

/// A normalized page ready for output
#[derive(Debug, Clone)]
pub struct NormalizedPage {
    /// Resolved page
    pub page: Page,
    /// Rendered text of each line, in line order
    pub rendered: Vec<String>,
    /// What the line-break pass did
    pub stats: LineBreakStats,
}

impl NormalizedPage {
    /// Render a resolved page
    pub fn new(normalizer: &Normalizer, page: Page, stats: LineBreakStats) -> Self {
        let rendered = normalizer.render_page(&page);
        Self {
            page,
            rendered,
            stats,
        }
    }

    /// Page identifier, or an empty string
    pub fn identifier(&self) -> &str {
        self.page.identifier().unwrap_or("")
    }
}

/// Presentation switches shared by the formatters
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    /// Show line identifiers and page markers
    pub identifiers: bool,
    /// Show the transcribed text of each line
    pub raw: bool,
    /// Pretty print JSON
    pub pretty_json: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            identifiers: true,
            raw: false,
            pretty_json: true,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single page
    fn format_page(&mut self, page: &NormalizedPage) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;
pub mod words;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
pub use words::WordsFormatter;
