//! Abbreviation resolution
//!
//! Expands scribal shorthand with the rules of a [`ReplacementTable`],
//! adapting the case of each replacement to the matched span.

use std::sync::Arc;

use regex::Captures;

use crate::table::ReplacementTable;

/// Case-aware rule rewriter
#[derive(Debug, Clone)]
pub struct AbbreviationResolver {
    table: Arc<ReplacementTable>,
}

impl AbbreviationResolver {
    /// Create a resolver over a shared table
    pub fn new(table: Arc<ReplacementTable>) -> Self {
        Self { table }
    }

    /// The underlying table
    pub fn table(&self) -> &ReplacementTable {
        &self.table
    }

    /// Apply every rule, in table order, to the whole text
    ///
    /// Each rule runs on the output of the previous one, so a later rule can
    /// match text introduced by an earlier replacement.
    pub fn resolve(&self, text: &str) -> String {
        let mut text = text.to_string();
        for rule in self.table.rules() {
            let replacement = rule.replacement();
            let rewritten = rule
                .regex()
                .replace_all(&text, |caps: &Captures<'_>| adapt_case(&caps[0], replacement));
            text = rewritten.into_owned();
        }
        text
    }
}

/// Shape the replacement after the case of the matched text
fn adapt_case(matched: &str, replacement: &str) -> String {
    if is_lowercase(matched) {
        replacement.to_lowercase()
    } else if is_titlecase(matched) {
        to_titlecase(replacement)
    } else if is_uppercase(matched) {
        replacement.to_uppercase()
    } else {
        replacement.to_string()
    }
}

/// At least one cased character, and all cased characters lowercase
fn is_lowercase(text: &str) -> bool {
    let mut cased = false;
    for ch in text.chars() {
        if ch.is_uppercase() {
            return false;
        }
        cased |= ch.is_lowercase();
    }
    cased
}

/// At least one cased character, and all cased characters uppercase
fn is_uppercase(text: &str) -> bool {
    let mut cased = false;
    for ch in text.chars() {
        if ch.is_lowercase() {
            return false;
        }
        cased |= ch.is_uppercase();
    }
    cased
}

/// Uppercase only at the start of each cased run, lowercase inside it
fn is_titlecase(text: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;
    for ch in text.chars() {
        if ch.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if ch.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }
    cased
}

fn to_titlecase(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_cased {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_cased = true;
        } else {
            result.push(ch);
            previous_cased = false;
        }
    }
    result
}
