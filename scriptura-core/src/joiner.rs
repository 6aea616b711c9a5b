//! Joining word fragments split by a line break

use std::sync::Arc;

use crate::abbreviation::AbbreviationResolver;
use crate::dictionary::DictionaryLookup;
use crate::macron::MacronResolver;

/// How a pair of fragments is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// The line ended with a hyphenation marker: join unconditionally
    Hyphenated,
    /// Join only if the dictionary accepts the combined word
    Tentative,
}

/// Result of a join attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The fragments form one word
    Joined(String),
    /// The fragments stay separate, each cleaned on its own
    Rejected {
        /// Cleaned first fragment
        first: String,
        /// Cleaned second fragment
        second: String,
    },
}

/// Cleans fragments and decides whether they belong together
#[derive(Debug, Clone)]
pub struct WordJoiner {
    abbreviations: AbbreviationResolver,
    macrons: MacronResolver,
    dictionary: Arc<dyn DictionaryLookup>,
}

impl WordJoiner {
    /// Create a joiner from its collaborators
    pub fn new(
        abbreviations: AbbreviationResolver,
        macrons: MacronResolver,
        dictionary: Arc<dyn DictionaryLookup>,
    ) -> Self {
        Self {
            abbreviations,
            macrons,
            dictionary,
        }
    }

    /// Resolve abbreviations, then macrons, in a single word
    pub fn clean(&self, word: &str) -> String {
        let expanded = self.abbreviations.resolve(word);
        self.macrons.replace_macrons(&expanded)
    }

    /// Join two fragments according to the mode
    pub fn join(&self, first: &str, second: &str, mode: JoinMode) -> JoinOutcome {
        let combined = self.clean(&format!("{first}{second}"));

        match mode {
            JoinMode::Hyphenated => JoinOutcome::Joined(combined),
            JoinMode::Tentative => match self.dictionary.check(&combined) {
                Some(accepted) => JoinOutcome::Joined(accepted),
                None => JoinOutcome::Rejected {
                    first: self.clean(first),
                    second: self.clean(second),
                },
            },
        }
    }
}
