//! Line-break resolution across a page
//!
//! Inspects the last token of every line and the first token of the line that
//! follows, and decides whether they are two halves of one word. Resolving
//! line `i` can change line `i + 1`, so lines are visited strictly in order.
//! The first word and the last word of the page are never touched: joining
//! across pages is up to the caller.

use serde::{Deserialize, Serialize};

use crate::joiner::{JoinMode, JoinOutcome, WordJoiner};
use crate::token::{Line, Page, Token, TokenKind};
use crate::tokenizer::classify;

/// Punctuation marking a word broken by the line end
pub const HYPHENATION_MARKERS: [&str; 2] = ["-", "="];

/// Counters collected during a line-break pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineBreakStats {
    /// Words joined across a hyphenation marker
    pub hyphenated_joins: usize,
    /// Words joined because the dictionary accepted the combination
    pub dictionary_joins: usize,
    /// Join attempts the dictionary rejected
    pub rejected_joins: usize,
    /// Lines left without content by a join
    pub emptied_lines: usize,
    /// Lines left untouched because of their trailing token
    pub skipped_lines: usize,
}

impl LineBreakStats {
    /// Total number of joins performed
    pub fn joins(&self) -> usize {
        self.hyphenated_joins + self.dictionary_joins
    }
}

impl std::ops::AddAssign for LineBreakStats {
    fn add_assign(&mut self, other: Self) {
        self.hyphenated_joins += other.hyphenated_joins;
        self.dictionary_joins += other.dictionary_joins;
        self.rejected_joins += other.rejected_joins;
        self.emptied_lines += other.emptied_lines;
        self.skipped_lines += other.skipped_lines;
    }
}

/// Drives the [`WordJoiner`] over the lines of a page
#[derive(Debug, Clone)]
pub struct LineBreakResolver {
    joiner: WordJoiner,
}

impl LineBreakResolver {
    /// Create a resolver
    pub fn new(joiner: WordJoiner) -> Self {
        Self { joiner }
    }

    /// The joiner used for cleaning and joining
    pub fn joiner(&self) -> &WordJoiner {
        &self.joiner
    }

    /// Resolve the line breaks of a page
    pub fn resolve_linebreaks(&self, mut page: Page) -> Page {
        self.resolve_in_place(&mut page);
        page
    }

    /// Resolve the line breaks of a page in place
    ///
    /// The number of lines never changes and every line keeps at least one
    /// token.
    pub fn resolve_in_place(&self, page: &mut Page) -> LineBreakStats {
        let mut stats = LineBreakStats::default();
        let lines = page.lines_mut();

        for index in 0..lines.len().saturating_sub(1) {
            if lines[index].is_content_empty() {
                continue;
            }

            let (head, tail) = lines.split_at_mut(index + 1);
            let current = &mut head[index];
            let next = &mut tail[0];

            if next.tokens().first().map_or(true, Token::is_empty_sentinel) {
                continue;
            }

            if self.resolve_pair(current, next, &mut stats) {
                tidy_after_join(current, next, &mut stats);
            }
        }

        stats
    }

    /// Handle one pair of neighbouring lines; returns whether `next` lost a token
    fn resolve_pair(&self, current: &mut Line, next: &mut Line, stats: &mut LineBreakStats) -> bool {
        let Some(last) = current.tokens().last() else {
            return false;
        };
        let kind = last.kind;
        let hyphenated = HYPHENATION_MARKERS.contains(&last.text.as_str());

        match kind {
            TokenKind::Punctuation if hyphenated => self.join_hyphenated(current, next, stats),
            TokenKind::Punctuation => {
                self.clean_across_punctuation(current, next);
                false
            }
            TokenKind::Word => self.join_at_word(current, next, stats),
            other => {
                log::info!(
                    "Leaving out line {}: last token is {:?}",
                    current.identifier(),
                    other
                );
                stats.skipped_lines += 1;
                false
            }
        }
    }

    /// Last token is `-` or `=`: the word continues on the next line
    fn join_hyphenated(
        &self,
        current: &mut Line,
        next: &mut Line,
        stats: &mut LineBreakStats,
    ) -> bool {
        if current.tokens().len() < 2 {
            log::info!(
                "Leaving out line {}: hyphenation marker without a fragment before it",
                current.identifier()
            );
            stats.skipped_lines += 1;
            return false;
        }

        current.tokens_mut().pop();
        let joined = self.apply_join(current, next, JoinMode::Hyphenated);
        if joined {
            stats.hyphenated_joins += 1;
        }
        joined
    }

    /// Last token is a plain word: join if the dictionary agrees
    fn join_at_word(&self, current: &mut Line, next: &mut Line, stats: &mut LineBreakStats) -> bool {
        let first = &next.tokens()[0];
        if !first.is_word() {
            self.clean_last_word(current);
            return false;
        }

        if first.text.chars().next().is_some_and(char::is_uppercase) {
            log::debug!(
                "Not joining {} and {}: '{}' is capitalized",
                current.identifier(),
                next.identifier(),
                first.text
            );
            self.clean_last_word(current);
            self.clean_first_word(next);
            return false;
        }

        let joined = self.apply_join(current, next, JoinMode::Tentative);
        if joined {
            stats.dictionary_joins += 1;
        } else {
            stats.rejected_joins += 1;
        }
        joined
    }

    /// Last token is a sentence or clause boundary: never join
    fn clean_across_punctuation(&self, current: &mut Line, next: &mut Line) {
        self.clean_last_word(current);
        self.clean_first_word(next);
    }

    /// Join the last token of `current` with the first token of `next`
    ///
    /// A merged token is unreadable if either half was. Returns whether the
    /// fragments were merged.
    fn apply_join(&self, current: &mut Line, next: &mut Line, mode: JoinMode) -> bool {
        let last_index = current.tokens().len() - 1;
        let outcome = self.joiner.join(
            &current.tokens()[last_index].text,
            &next.tokens()[0].text,
            mode,
        );

        match outcome {
            JoinOutcome::Joined(word) => {
                log::debug!(
                    "Joined {} and {} into '{}'",
                    current.identifier(),
                    next.identifier(),
                    word
                );
                current.tokens_mut()[last_index] = classify(&word);
                next.tokens_mut().remove(0);
                true
            }
            JoinOutcome::Rejected { first, second } => {
                current.tokens_mut()[last_index].text = first;
                next.tokens_mut()[0].text = second;
                false
            }
        }
    }

    /// Clean the last word of a line, looking past trailing non-word tokens
    fn clean_last_word(&self, line: &mut Line) {
        match line.tokens().iter().rposition(Token::is_word) {
            Some(index) => {
                let cleaned = self.joiner.clean(&line.tokens()[index].text);
                line.tokens_mut()[index].text = cleaned;
            }
            None => log::debug!("Line {} has no word to clean", line.identifier()),
        }
    }

    /// Clean the first token of a line if it is a word
    fn clean_first_word(&self, line: &mut Line) {
        if let Some(first) = line.tokens_mut().first_mut().filter(|t| t.is_word()) {
            first.text = self.joiner.clean(&first.text);
        }
    }
}

/// Restore the line invariants after `next` lost its first token
fn tidy_after_join(current: &mut Line, next: &mut Line, stats: &mut LineBreakStats) {
    if next.heal() {
        log::info!("Line {} is empty after resolving the line break", next.identifier());
        stats.emptied_lines += 1;
    }

    if next.tokens()[0].is_punctuation() {
        let punctuation = next.tokens_mut().remove(0);
        current.tokens_mut().push(punctuation);

        if next.heal() {
            log::info!("Line {} is empty after resolving the line break", next.identifier());
            stats.emptied_lines += 1;
        }
    }
}
