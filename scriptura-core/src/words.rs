//! Word-list extraction for token-level comparison
//!
//! A normalized page sequence is flattened into one entry per word, optionally
//! interleaved with page-break and line-break markers so a diff tool can map
//! differences back to their location.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::{Page, TokenKind};

/// Prefix of break markers in a serialized word list
pub const BREAK_MARKER_PREFIX: &str = "$$";

/// One entry of a word list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum WordListEntry {
    /// Start of a page
    PageBreak(String),
    /// Start of a line
    LineBreak(String),
    /// A word or an unreadable fragment
    Word(String),
}

impl WordListEntry {
    /// Whether the entry is a page or line break
    pub fn is_break(&self) -> bool {
        !matches!(self, Self::Word(_))
    }
}

impl fmt::Display for WordListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageBreak(id) | Self::LineBreak(id) => write!(f, "{BREAK_MARKER_PREFIX}{id}"),
            Self::Word(word) => f.write_str(word),
        }
    }
}

/// Flatten pages into a word list
///
/// Punctuation and empty sentinels are dropped. With `breaks`, each page is
/// preceded by a page marker (pages without an identifier are numbered from
/// 1) and each line by a line marker.
pub fn extract_words(pages: &[Page], breaks: bool) -> Vec<WordListEntry> {
    let mut entries = Vec::new();

    for (page_index, page) in pages.iter().enumerate() {
        if breaks {
            let id = page
                .identifier()
                .map_or_else(|| (page_index + 1).to_string(), str::to_string);
            entries.push(WordListEntry::PageBreak(id));
        }

        for line in page.lines() {
            if breaks {
                entries.push(WordListEntry::LineBreak(line.identifier().to_string()));
            }
            entries.extend(
                line.tokens()
                    .iter()
                    .filter(|t| matches!(t.kind, TokenKind::Word | TokenKind::Unreadable))
                    .map(|t| WordListEntry::Word(t.text.clone())),
            );
        }
    }

    entries
}
