//! Word-list output formatter

use super::{NormalizedPage, OutputFormatter};
use anyhow::Result;
use scriptura_core::{extract_words, Page};
use std::io::Write;

/// Word-list formatter - one word per line for token-level comparison
///
/// With break markers enabled, pages and lines are announced by `$$<id>`
/// lines.
pub struct WordsFormatter<W: Write> {
    writer: W,
    breaks: bool,
    pages: Vec<Page>,
}

impl<W: Write> WordsFormatter<W> {
    /// Create a new word-list formatter
    pub fn new(writer: W, breaks: bool) -> Self {
        Self {
            writer,
            breaks,
            pages: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for WordsFormatter<W> {
    fn format_page(&mut self, page: &NormalizedPage) -> Result<()> {
        self.pages.push(page.page.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        for entry in extract_words(&self.pages, self.breaks) {
            writeln!(self.writer, "{entry}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_page;

    fn render(breaks: bool) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = WordsFormatter::new(&mut buffer, breaks);
            formatter.format_page(&sample_page()).unwrap();
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_words_with_breaks() {
        assert_eq!(
            render(true),
            "$$f1r\n$$r1l1\nIn\nillo\ntempore\ndominus\ngloria\n$$r1l2\npatri\n|\nfilio\n"
        );
    }

    #[test]
    fn test_words_only() {
        assert_eq!(
            render(false),
            "In\nillo\ntempore\ndominus\ngloria\npatri\n|\nfilio\n"
        );
    }
}
