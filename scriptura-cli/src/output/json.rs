//! JSON output formatter

use super::{NormalizedPage, OutputFormatter};
use anyhow::Result;
use scriptura_core::{LineBreakStats, Token};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs pages as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    pages: Vec<PageData>,
}

/// Data structure for one page of JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct PageData {
    /// Page identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Lines in reading order
    pub lines: Vec<LineData>,
    /// Line-break pass counters
    pub stats: LineBreakStats,
}

/// Data structure for one line of JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// Line identifier
    pub identifier: String,
    /// Text as transcribed
    pub raw_text: String,
    /// Rendered normalized text
    pub text: String,
    /// Resolved tokens
    pub tokens: Vec<Token>,
}

impl From<&NormalizedPage> for PageData {
    fn from(page: &NormalizedPage) -> Self {
        Self {
            identifier: page.page.identifier().map(str::to_string),
            lines: page
                .page
                .lines()
                .iter()
                .zip(&page.rendered)
                .map(|(line, text)| LineData {
                    identifier: line.identifier().to_string(),
                    raw_text: line.raw_text().to_string(),
                    text: text.clone(),
                    tokens: line.tokens().to_vec(),
                })
                .collect(),
            stats: page.stats,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            pages: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_page(&mut self, page: &NormalizedPage) -> Result<()> {
        self.pages.push(page.into());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.pages)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.pages)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
