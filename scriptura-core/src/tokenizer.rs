//! Tokenizer for resolved line text

use crate::token::Token;

/// Characters split off as punctuation tokens
pub const PUNCTUATION: [char; 10] = ['.', ',', ';', ':', '?', '-', '=', '(', ')', ']'];

/// Marker for illegible characters in a transcription
pub const UNREADABLE_MARKER: char = '#';

fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Splits text into words, punctuation and unreadable fragments
///
/// Abbreviations must be resolved before tokenizing: several scribal
/// abbreviations use punctuation-like characters (`q;`, `b:`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Split text into tokens in reading order
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (index, ch) in text.char_indices() {
            if ch.is_whitespace() || is_punctuation(ch) {
                if let Some(begin) = start.take() {
                    tokens.push(classify(&text[begin..index]));
                }
                if is_punctuation(ch) {
                    tokens.push(Token::punctuation(ch.to_string()));
                }
            } else if start.is_none() {
                start = Some(index);
            }
        }
        if let Some(begin) = start {
            tokens.push(classify(&text[begin..]));
        }

        tokens
    }
}

/// Word or unreadable fragment, depending on the unreadable marker
pub(crate) fn classify(fragment: &str) -> Token {
    if fragment.contains(UNREADABLE_MARKER) {
        Token::unreadable(fragment)
    } else {
        Token::word(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    #[test]
    fn test_split_on_punctuation() {
        let tokens = Tokenizer.tokenize("verbum.aliud");
        assert_eq!(
            kinds_and_texts(&tokens),
            vec![
                (TokenKind::Word, "verbum"),
                (TokenKind::Punctuation, "."),
                (TokenKind::Word, "aliud"),
            ]
        );
    }

    #[test]
    fn test_unreadable_fragment() {
        let tokens = Tokenizer.tokenize("wo#rd");
        assert_eq!(kinds_and_texts(&tokens), vec![(TokenKind::Unreadable, "wo#rd")]);
    }

    #[test]
    fn test_whitespace_is_discarded() {
        let tokens = Tokenizer.tokenize("  arma \t uirumque\n cano  ");
        assert_eq!(
            kinds_and_texts(&tokens),
            vec![
                (TokenKind::Word, "arma"),
                (TokenKind::Word, "uirumque"),
                (TokenKind::Word, "cano"),
            ]
        );
    }

    #[test]
    fn test_all_punctuation_characters() {
        let tokens = Tokenizer.tokenize("a.b,c;d:e?f-g=h(i)j]k");
        let punctuation: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_punctuation())
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(punctuation, vec![".", ",", ";", ":", "?", "-", "=", "(", ")", "]"]);
        assert_eq!(tokens.len(), 21);
    }

    #[test]
    fn test_opening_bracket_is_not_punctuation() {
        let tokens = Tokenizer.tokenize("[sic]");
        assert_eq!(
            kinds_and_texts(&tokens),
            vec![(TokenKind::Word, "[sic"), (TokenKind::Punctuation, "]")]
        );
    }

    #[test]
    fn test_consecutive_punctuation() {
        let tokens = Tokenizer.tokenize("tem- .");
        assert_eq!(
            kinds_and_texts(&tokens),
            vec![
                (TokenKind::Word, "tem"),
                (TokenKind::Punctuation, "-"),
                (TokenKind::Punctuation, "."),
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(Tokenizer.tokenize("").is_empty());
        assert!(Tokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn test_multibyte_words() {
        let tokens = Tokenizer.tokenize("tēpore, ā");
        assert_eq!(
            kinds_and_texts(&tokens),
            vec![
                (TokenKind::Word, "tēpore"),
                (TokenKind::Punctuation, ","),
                (TokenKind::Word, "ā"),
            ]
        );
    }
}
