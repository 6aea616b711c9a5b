//! Macron disambiguation
//!
//! In Latin manuscripts a macron over a vowel stands for an elided `m` or `n`.
//! Which consonant is meant is decided by trying every combination against the
//! dictionary.
//!
//! # Disambiguation rule
//!
//! For `k` macron vowels the `2^k` spellings are tried in Cartesian-product
//! order: the last macron varies fastest and `m` comes before `n`. The first
//! spelling the dictionary accepts wins. There is no frequency ranking: the
//! enumeration order is the tie-break.

use std::ops::Range;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::dictionary::DictionaryLookup;
use crate::token::Token;

/// Marker appended to a vowel whose macron could not be resolved
pub const DEFAULT_AMBIGUITY_MARKER: char = '●';

/// Upper bound on macrons per word before the search is abandoned
pub const DEFAULT_MAX_MACRONS: usize = 12;

/// Consonants a macron may stand for, in enumeration order
const NASALS: [char; 2] = ['m', 'n'];

/// Plain form of a macron vowel
fn plain_vowel(ch: char) -> Option<char> {
    match ch {
        'ā' => Some('a'),
        'ē' => Some('e'),
        'ī' => Some('i'),
        'ō' => Some('o'),
        'ū' => Some('u'),
        'Ā' => Some('A'),
        'Ē' => Some('E'),
        'Ī' => Some('I'),
        'Ō' => Some('O'),
        'Ū' => Some('U'),
        _ => None,
    }
}

/// Whether the text contains at least one macron vowel
pub fn has_macron(text: &str) -> bool {
    text.chars().any(|c| plain_vowel(c).is_some())
}

/// Dictionary-backed m/n resolver
#[derive(Debug, Clone)]
pub struct MacronResolver {
    dictionary: Arc<dyn DictionaryLookup>,
    marker: char,
    max_macrons: usize,
}

impl MacronResolver {
    /// Create a resolver with the default marker and macron limit
    pub fn new(dictionary: Arc<dyn DictionaryLookup>) -> Self {
        Self {
            dictionary,
            marker: DEFAULT_AMBIGUITY_MARKER,
            max_macrons: DEFAULT_MAX_MACRONS,
        }
    }

    /// Use a different ambiguity marker
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Limit the number of macrons searched per word (at most 32)
    pub fn with_max_macrons(mut self, max_macrons: usize) -> Self {
        self.max_macrons = max_macrons.min(32);
        self
    }

    /// Ambiguity marker in use
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Resolve the interior words of a line
    ///
    /// The first token and the last word (with any trailing non-word tokens)
    /// are left alone: they may still be joined with a neighbouring line and
    /// are resolved during line-break resolution instead.
    pub fn resolve_macrons(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        self.resolve_interior(&mut tokens);
        tokens
    }

    /// In-place variant of [`MacronResolver::resolve_macrons`]
    pub fn resolve_interior(&self, tokens: &mut [Token]) {
        let range = interior_range(tokens);
        for token in &mut tokens[range] {
            if token.is_word() && has_macron(&token.text) {
                token.text = self.replace_macrons(&token.text);
            }
        }
    }

    /// Replace the macrons of one word with `m` or `n`
    ///
    /// Returns the first dictionary-approved spelling (lower case). When no
    /// spelling validates, each macron vowel of the original word is replaced
    /// by its plain vowel followed by the ambiguity marker. Never fails.
    pub fn replace_macrons(&self, word: &str) -> String {
        let lowered: Vec<char> = word.to_lowercase().chars().collect();
        let positions: SmallVec<[usize; 4]> = lowered
            .iter()
            .enumerate()
            .filter(|(_, c)| plain_vowel(**c).is_some())
            .map(|(i, _)| i)
            .collect();

        if positions.is_empty() {
            return word.to_string();
        }
        if positions.len() > self.max_macrons {
            log::warn!(
                "'{}' has {} macrons (limit {}), marking it for review",
                word,
                positions.len(),
                self.max_macrons
            );
            return self.mark_ambiguous(word);
        }

        let count = positions.len();
        for assignment in 0..(1u64 << count) {
            let candidate = spell_candidate(&lowered, &positions, assignment);
            if self.dictionary.is_valid(&candidate) {
                return candidate;
            }
        }

        log::debug!("No dictionary spelling for '{word}'");
        self.mark_ambiguous(word)
    }

    fn mark_ambiguous(&self, word: &str) -> String {
        let mut marked = String::with_capacity(word.len() + 4);
        for ch in word.chars() {
            match plain_vowel(ch) {
                Some(plain) => {
                    marked.push(plain);
                    marked.push(self.marker);
                }
                None => marked.push(ch),
            }
        }
        marked
    }
}

/// Token range eligible for macron resolution on a line
///
/// Excludes the first token and everything from the last word onwards.
pub(crate) fn interior_range(tokens: &[Token]) -> Range<usize> {
    match tokens.iter().rposition(Token::is_word) {
        Some(last_word) if last_word > 1 => 1..last_word,
        _ => 0..0,
    }
}

/// Spell out one m/n assignment; bit `count - 1 - j` selects the consonant of macron `j`
fn spell_candidate(chars: &[char], positions: &[usize], assignment: u64) -> String {
    let count = positions.len();
    let mut candidate = String::with_capacity(chars.len() + count);
    let mut next = 0;

    for (index, &ch) in chars.iter().enumerate() {
        if next < count && positions[next] == index {
            let bit = (assignment >> (count - 1 - next)) & 1;
            candidate.push(plain_vowel(ch).unwrap_or(ch));
            candidate.push(NASALS[bit as usize]);
            next += 1;
        } else {
            candidate.push(ch);
        }
    }

    candidate
}
