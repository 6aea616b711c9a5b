//! Dictionary lookup
//!
//! Every lexical validity check in the engine goes through
//! [`DictionaryLookup`]. The resource behind it is loaded once and only read
//! afterwards, so implementations are shared across threads.
//!
//! [`HunspellDictionary`] is the production lookup: it expands affix rules, so
//! inflected forms validate against their stems. [`WordList`] accepts exactly
//! the words it lists.

use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::DictionaryError;

/// Read-only lexical resource
pub trait DictionaryLookup: Send + Sync {
    /// Check a word, returning its accepted (canonical) form
    ///
    /// Implementations must accept lower-cased input and apply their own
    /// morphological matching. A failed lookup is a plain negative answer,
    /// never an error.
    fn check(&self, word: &str) -> Option<String>;

    /// Whether the word is valid
    fn is_valid(&self, word: &str) -> bool {
        self.check(word).is_some()
    }
}

impl std::fmt::Debug for dyn DictionaryLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn DictionaryLookup")
    }
}

impl<D: DictionaryLookup + ?Sized> DictionaryLookup for std::sync::Arc<D> {
    fn check(&self, word: &str) -> Option<String> {
        (**self).check(word)
    }
}

/// In-memory word list
///
/// Accepts a word if it is listed as given or in lower case, so a
/// capitalized sentence-initial form validates against a lower-case entry.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Create an empty word list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a word list from words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a word list from a file
    ///
    /// See [`WordList::from_reader`] for the accepted format.
    pub fn from_file(path: &Path) -> Result<Self, DictionaryError> {
        let file = fs::File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_reader(file)?;
        log::info!("Loaded {} dictionary entries from {}", list.len(), path.display());
        Ok(list)
    }

    /// Load a word list from a reader
    ///
    /// One word per line. Blank lines and lines starting with `#` are
    /// skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = HashSet::new();

        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && !word.starts_with('#') {
                words.insert(word.to_string());
            }
        }

        Ok(Self { words })
    }

    /// Add a word
    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryLookup for WordList {
    fn check(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }
        if self.words.contains(word) || self.words.contains(&word.to_lowercase()) {
            Some(word.to_string())
        } else {
            None
        }
    }
}

/// Hunspell dictionary built from an affix file and a word file
///
/// Words in the `.dic` file carry affix flags; the rules in the `.aff` file
/// expand them, so `amicus/B` also accepts `amici` when `B` defines that
/// ending.
pub struct HunspellDictionary {
    inner: spellbook::Dictionary,
}

impl HunspellDictionary {
    /// Parse a dictionary from the contents of its `.aff` and `.dic` files
    pub fn new(affix: &str, words: &str) -> Result<Self, DictionaryError> {
        let inner = spellbook::Dictionary::new(affix, words)
            .map_err(|err| DictionaryError::Hunspell(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Load a dictionary from an `.aff`/`.dic` pair
    pub fn from_files(affix_path: &Path, words_path: &Path) -> Result<Self, DictionaryError> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        let dictionary = Self::new(&read(affix_path)?, &read(words_path)?)?;
        log::info!(
            "Loaded Hunspell dictionary {} with affixes from {}",
            words_path.display(),
            affix_path.display()
        );
        Ok(dictionary)
    }
}

impl std::fmt::Debug for HunspellDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HunspellDictionary").finish_non_exhaustive()
    }
}

impl DictionaryLookup for HunspellDictionary {
    fn check(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }
        if self.inner.check(word) || self.inner.check(&word.to_lowercase()) {
            Some(word.to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_returns_word() {
        let list = WordList::from_words(["amicus", "tempore"]);
        assert_eq!(list.check("amicus"), Some("amicus".to_string()));
        assert!(list.is_valid("tempore"));
        assert!(!list.is_valid("amimcus"));
        assert!(!list.is_valid(""));
    }

    #[test]
    fn test_capitalized_form_validates() {
        let list = WordList::from_words(["roma"]);
        assert!(list.is_valid("Roma"));
        assert!(list.is_valid("ROMA"));
    }

    const LATIN_AFF: &str = "SET UTF-8\n\
TRY aeiouclmnrstdgpbqfhx\n\
\n\
SFX B Y 2\n\
SFX B us i us\n\
SFX B us orum us\n\
\n\
SFX N Y 2\n\
SFX N us oris us\n\
SFX N us ore us\n";

    const LATIN_DIC: &str = "3\namicus/B\ntempus/N\nrex\n";

    #[test]
    fn test_word_list_format() {
        let content = "amicus\ntempus\n# comment\n\nrex\n";
        let list = WordList::from_reader(content.as_bytes()).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.is_valid("amicus"));
        assert!(list.is_valid("rex"));
        assert!(!list.is_valid("amici"));
    }

    #[test]
    fn test_hunspell_accepts_inflected_forms() {
        let dictionary = HunspellDictionary::new(LATIN_AFF, LATIN_DIC).unwrap();
        assert!(dictionary.is_valid("amicus"));
        assert!(dictionary.is_valid("amici"));
        assert!(dictionary.is_valid("amicorum"));
        assert!(dictionary.is_valid("temporis"));
        assert!(dictionary.is_valid("tempore"));
        assert!(dictionary.is_valid("rex"));
        assert!(!dictionary.is_valid("amicis"));
        assert!(!dictionary.is_valid("temporum"));
        assert!(!dictionary.is_valid(""));
    }

    #[test]
    fn test_hunspell_capitalized_form_validates() {
        let dictionary = HunspellDictionary::new(LATIN_AFF, LATIN_DIC).unwrap();
        assert_eq!(dictionary.check("Amici"), Some("Amici".to_string()));
    }

    #[test]
    fn test_hunspell_from_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let affix_path = dir.path().join("la.aff");
        let words_path = dir.path().join("la.dic");
        fs::write(&affix_path, LATIN_AFF).unwrap();
        fs::write(&words_path, LATIN_DIC).unwrap();

        let dictionary = HunspellDictionary::from_files(&affix_path, &words_path).unwrap();
        assert!(dictionary.is_valid("temporis"));

        let missing = HunspellDictionary::from_files(&dir.path().join("none.aff"), &words_path);
        assert!(matches!(missing, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn test_hunspell_drives_macron_resolution() {
        use crate::macron::MacronResolver;
        use std::sync::Arc;

        let dictionary = HunspellDictionary::new(LATIN_AFF, LATIN_DIC).unwrap();
        let resolver = MacronResolver::new(Arc::new(dictionary));
        assert_eq!(resolver.replace_macrons("tēporis"), "temporis");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "dominus\nsanctus").unwrap();

        let list = WordList::from_file(file.path()).unwrap();
        assert!(list.is_valid("sanctus"));
    }

    #[test]
    fn test_from_file_not_found() {
        let result = WordList::from_file(Path::new("/nonexistent/la.dic"));
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn test_shared_dictionary() {
        let shared: std::sync::Arc<dyn DictionaryLookup> =
            std::sync::Arc::new(WordList::from_words(["et"]));
        assert!(shared.is_valid("et"));
    }
}
