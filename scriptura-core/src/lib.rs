//! Normalization engine for diplomatic transcriptions of Latin manuscripts
//!
//! A diplomatic transcription keeps the scribe's literal spelling: abbreviations
//! stay abbreviated, macrons over vowels stand for an elided `m` or `n`, and
//! words wrap across the physical lines of the page. This crate turns such a
//! transcription into clean running text suitable for linguistic comparison.
//!
//! # Architecture
//!
//! The pipeline is built from small components that receive their external
//! resources (a [`ReplacementTable`] and a [`DictionaryLookup`]) at
//! construction:
//! - [`AbbreviationResolver`]: ordered, case-aware rule rewriting
//! - [`Tokenizer`]: splits resolved text into classified [`Token`]s
//! - [`MacronResolver`]: m/n disambiguation validated against the dictionary
//! - [`WordJoiner`] and [`LineBreakResolver`]: repair words split by line breaks
//! - [`AutoSpacer`]: renders tokens back into readable text
//!
//! The [`Normalizer`] facade wires everything together.
//!
//! # Example
//!
//! ```rust
//! use scriptura_core::{Normalizer, RawLine, ReplacementTable, WordList};
//!
//! let table = ReplacementTable::from_pairs([("dns", "dominus")]).unwrap();
//! let dictionary = WordList::from_words(["dominus", "tempore", "gloriosus"]);
//!
//! let normalizer = Normalizer::builder()
//!     .table(table)
//!     .dictionary(dictionary)
//!     .build()
//!     .unwrap();
//!
//! let page = normalizer.normalize_page([
//!     RawLine::new("l1", "Dns uenit in tēpore illo, glo-"),
//!     RawLine::new("l2", "riosus et magnus."),
//! ]);
//!
//! assert_eq!(
//!     normalizer.render(&page.lines()[0]),
//!     "Dominus uenit in tempore illo, gloriosus"
//! );
//! assert_eq!(normalizer.render(&page.lines()[1]), "et magnus.");
//! ```

pub mod abbreviation;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod joiner;
pub mod linebreak;
pub mod macron;
pub mod normalizer;
pub mod spacer;
pub mod table;
pub mod token;
pub mod tokenizer;
pub mod words;

pub use abbreviation::AbbreviationResolver;
pub use config::NormalizerConfig;
pub use dictionary::{DictionaryLookup, HunspellDictionary, WordList};
pub use error::{ConfigError, DictionaryError, Error, Result, TableError};
pub use joiner::{JoinMode, JoinOutcome, WordJoiner};
pub use linebreak::{LineBreakResolver, LineBreakStats};
pub use macron::MacronResolver;
pub use normalizer::{Normalizer, NormalizerBuilder, RawLine, RawPage};
pub use spacer::AutoSpacer;
pub use table::{ReplacementRule, ReplacementTable, TableLoader};
pub use token::{Line, Page, Token, TokenKind};
pub use tokenizer::Tokenizer;
pub use words::{extract_words, WordListEntry};
