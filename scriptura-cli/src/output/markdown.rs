//! Markdown output formatter

use super::{DisplayOptions, NormalizedPage, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs each page as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    options: DisplayOptions,
    page_count: usize,
    line_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, options: DisplayOptions) -> Self {
        Self {
            writer,
            options,
            page_count: 0,
            line_count: 0,
        }
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_page(&mut self, page: &NormalizedPage) -> Result<()> {
        self.page_count += 1;
        let title = page
            .page
            .identifier()
            .map_or_else(|| format!("Page {}", self.page_count), str::to_string);
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;

        let mut header = Vec::new();
        if self.options.identifiers {
            header.push("Line");
        }
        header.push("Text");
        if self.options.raw {
            header.push("Transcription");
        }
        writeln!(self.writer, "| {} |", header.join(" | "))?;
        writeln!(self.writer, "|{}", "---|".repeat(header.len()))?;

        for (line, text) in page.page.lines().iter().zip(&page.rendered) {
            self.line_count += 1;
            let mut cells = Vec::with_capacity(3);
            if self.options.identifiers {
                cells.push(escape_cell(line.identifier()));
            }
            cells.push(escape_cell(text));
            if self.options.raw {
                cells.push(escape_cell(line.raw_text()));
            }
            writeln!(self.writer, "| {} |", cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total pages: {}, lines: {}*",
            self.page_count, self.line_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
