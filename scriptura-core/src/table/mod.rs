//! Replacement tables
//!
//! A replacement table is an ordered list of regex rules. Order matters: rules
//! are applied one after another, each on the output of the previous, so a
//! later rule may rewrite text produced by an earlier one.

pub mod loader;

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

use crate::error::TableError;

pub use loader::TableLoader;

/// One rewriting rule
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pattern: String,
    replacement: String,
    regex: Regex,
    attributes: BTreeMap<String, String>,
}

impl ReplacementRule {
    /// Compile a rule; matching is case-insensitive
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<Self, TableError> {
        let pattern = pattern.into();
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| TableError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;

        Ok(Self {
            pattern,
            replacement: replacement.into(),
            regex,
            attributes: BTreeMap::new(),
        })
    }

    /// Attach the remaining table columns
    pub fn with_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Source pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Replacement text
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Compiled case-insensitive pattern
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Additional columns keyed by header name
    pub fn attribute(&self, column: &str) -> Option<&str> {
        self.attributes.get(column).map(String::as_str)
    }
}

/// Ordered collection of replacement rules
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    rules: Vec<ReplacementRule>,
}

impl ReplacementTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(pattern, replacement)` pairs in application order
    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let mut table = Self::new();
        for (pattern, replacement) in pairs {
            table.push(ReplacementRule::new(pattern, replacement)?);
        }
        Ok(table)
    }

    /// Append a rule
    ///
    /// A rule whose pattern is already present takes over the earlier rule's
    /// position instead of being appended.
    pub fn push(&mut self, rule: ReplacementRule) {
        match self.rules.iter_mut().find(|r| r.pattern == rule.pattern) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Rules in application order
    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_keep_insertion_order() {
        let table = ReplacementTable::from_pairs([("q;", "que"), ("dns", "dominus")]).unwrap();
        let patterns: Vec<_> = table.rules().iter().map(|r| r.pattern()).collect();
        assert_eq!(patterns, vec!["q;", "dns"]);
    }

    #[test]
    fn test_duplicate_pattern_keeps_first_position() {
        let table =
            ReplacementTable::from_pairs([("dns", "dominus"), ("xps", "christus"), ("dns", "deus")])
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rules()[0].replacement(), "deus");
        assert_eq!(table.rules()[1].pattern(), "xps");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = ReplacementTable::from_pairs([("[abc", "x")]);
        match result {
            Err(TableError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "[abc"),
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rule = ReplacementRule::new(r"\bdns\b", "dominus").unwrap();
        assert!(rule.regex().is_match("DNS"));
        assert!(rule.regex().is_match("Dns noster"));
    }
}
