//! Plain text output formatter

use super::{DisplayOptions, NormalizedPage, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Width of the identifier column
const IDENTIFIER_WIDTH: usize = 8;

/// Plain text formatter - outputs one normalized line per line
pub struct TextFormatter<W: Write> {
    writer: W,
    options: DisplayOptions,
    pages_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: DisplayOptions) -> Self {
        Self {
            writer,
            options,
            pages_written: 0,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(options: DisplayOptions) -> Self {
        Self::new(io::stdout(), options)
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_page(&mut self, page: &NormalizedPage) -> Result<()> {
        if self.pages_written > 0 {
            writeln!(self.writer)?;
        }
        self.pages_written += 1;

        if self.options.identifiers {
            if let Some(id) = page.page.identifier() {
                writeln!(self.writer, "[{id}]")?;
            }
        }

        for (line, text) in page.page.lines().iter().zip(&page.rendered) {
            if self.options.identifiers {
                writeln!(
                    self.writer,
                    "{:>width$}  {}",
                    line.identifier(),
                    text,
                    width = IDENTIFIER_WIDTH
                )?;
            } else {
                writeln!(self.writer, "{text}")?;
            }

            if self.options.raw {
                let indent = if self.options.identifiers {
                    IDENTIFIER_WIDTH + 2
                } else {
                    4
                };
                writeln!(self.writer, "{:indent$}{}", "", line.raw_text())?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
