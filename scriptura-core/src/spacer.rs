//! Rendering tokens back into readable text

use crate::token::{Line, Token, TokenKind};

const OPEN_PARENTHESIS: &str = "(";

/// Reassembles a token sequence with conventional spacing
///
/// Words and unreadable fragments are separated by single spaces and
/// punctuation attaches to the preceding token. An opening parenthesis always
/// gets a space before it, even at the start of a line, and attaches to the
/// token that follows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoSpacer;

impl AutoSpacer {
    /// Create a spacer
    pub fn new() -> Self {
        Self
    }

    /// Render a line
    pub fn render(&self, line: &Line) -> String {
        self.render_tokens(line.tokens())
    }

    /// Render a token sequence
    pub fn render_tokens(&self, tokens: &[Token]) -> String {
        let mut output = String::new();
        let mut suppress_space = true;

        for token in tokens {
            match token.kind {
                TokenKind::Word | TokenKind::Unreadable => {
                    if !suppress_space {
                        output.push(' ');
                    }
                    output.push_str(&token.text);
                    suppress_space = false;
                }
                TokenKind::Punctuation if token.text == OPEN_PARENTHESIS => {
                    output.push(' ');
                    output.push_str(&token.text);
                    suppress_space = true;
                }
                TokenKind::Punctuation => output.push_str(&token.text),
                TokenKind::Empty => {}
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence() {
        let tokens = [
            Token::word("Gallia"),
            Token::word("est"),
            Token::punctuation("."),
        ];
        assert_eq!(AutoSpacer.render_tokens(&tokens), "Gallia est.");
    }

    #[test]
    fn test_parenthesis_suppresses_following_space() {
        let tokens = [
            Token::word("Gallia"),
            Token::punctuation("("),
            Token::word("omnis"),
            Token::punctuation(")"),
            Token::word("est"),
        ];
        assert_eq!(AutoSpacer.render_tokens(&tokens), "Gallia (omnis) est");
    }

    #[test]
    fn test_leading_parenthesis() {
        let tokens = [Token::punctuation("("), Token::word("sic"), Token::punctuation(")")];
        assert_eq!(AutoSpacer.render_tokens(&tokens), " (sic)");
    }

    #[test]
    fn test_hyphen_attaches_to_word() {
        let tokens = [Token::word("in"), Token::word("tem"), Token::punctuation("-")];
        assert_eq!(AutoSpacer.render_tokens(&tokens), "in tem-");
    }

    #[test]
    fn test_unreadable_spaced_like_words() {
        let tokens = [Token::word("in"), Token::unreadable("t#m"), Token::punctuation(",")];
        assert_eq!(AutoSpacer.render_tokens(&tokens), "in t#m,");
    }

    #[test]
    fn test_empty_line_renders_empty() {
        let line = Line::from_tokens("l1", vec![]);
        assert_eq!(AutoSpacer.render(&line), "");
    }
}
