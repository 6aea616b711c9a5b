//! Tokens, lines and pages

use serde::{Deserialize, Serialize};

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A (possibly abbreviated or fragmentary) word
    Word,
    /// A single punctuation character
    Punctuation,
    /// A fragment containing illegible characters (`#`)
    Unreadable,
    /// Sentinel keeping a line non-vacuous; never real content
    Empty,
}

/// A classified fragment of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Token text
    pub text: String,
}

impl Token {
    /// Create a token of the given kind
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a word token
    pub fn word(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Word, text)
    }

    /// Create a punctuation token
    pub fn punctuation(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Punctuation, text)
    }

    /// Create an unreadable token
    pub fn unreadable(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Unreadable, text)
    }

    /// Create the empty sentinel
    pub fn empty() -> Self {
        Self::new(TokenKind::Empty, "")
    }

    /// Whether this is a word token
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Whether this is a punctuation token
    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }

    /// Whether this is the empty sentinel
    pub fn is_empty_sentinel(&self) -> bool {
        self.kind == TokenKind::Empty
    }
}

/// One manuscript line
///
/// A line always holds at least one token. When it has no content left it
/// holds a single [`TokenKind::Empty`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    identifier: String,
    raw_text: String,
    resolved_text: String,
    tokens: Vec<Token>,
}

impl Line {
    /// Build a line from already classified tokens
    ///
    /// The raw and resolved text are reconstructed from the token texts.
    pub fn from_tokens(identifier: impl Into<String>, tokens: Vec<Token>) -> Self {
        let text = tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self::with_text(identifier, text.clone(), text, tokens)
    }

    /// Build a line with its raw and abbreviation-resolved text
    pub fn with_text(
        identifier: impl Into<String>,
        raw_text: impl Into<String>,
        resolved_text: impl Into<String>,
        tokens: Vec<Token>,
    ) -> Self {
        let mut line = Self {
            identifier: identifier.into(),
            raw_text: raw_text.into(),
            resolved_text: resolved_text.into(),
            tokens,
        };
        line.heal();
        line
    }

    /// Identifier assigned by the upstream transcription source
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Text as transcribed
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Text after abbreviation resolution, before tokenization
    pub fn resolved_text(&self) -> &str {
        &self.resolved_text
    }

    /// Tokens in reading order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether the line holds no content (only the empty sentinel)
    pub fn is_content_empty(&self) -> bool {
        self.tokens.iter().all(Token::is_empty_sentinel)
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut Vec<Token> {
        &mut self.tokens
    }

    /// Restore the non-vacuous invariant; returns whether a sentinel was inserted
    pub(crate) fn heal(&mut self) -> bool {
        if self.tokens.is_empty() {
            self.tokens.push(Token::empty());
            true
        } else {
            false
        }
    }
}

/// One manuscript page: lines in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    lines: Vec<Line>,
}

impl Page {
    /// Create a page from its lines
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            identifier: None,
            lines,
        }
    }

    /// Attach a page identifier (e.g. a citation address)
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Page identifier, if any
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Lines in reading order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the page has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }
}
