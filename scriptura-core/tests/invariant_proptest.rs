//! Property-based tests for structural invariants of normalization

use proptest::prelude::*;
use scriptura_core::{Normalizer, RawLine, ReplacementTable, TokenKind, WordList};

/// Replacements never contain any pattern, so a second pass has nothing to do
fn table() -> ReplacementTable {
    ReplacementTable::from_pairs([("dns", "dominus"), ("q;", "que"), ("ꝓ", "pro")]).unwrap()
}

fn normalizer() -> Normalizer {
    Normalizer::builder()
        .table(table())
        .dictionary(WordList::from_words(["etcetera", "tempore", "gloria"]))
        .build()
        .unwrap()
}

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "et", "cetera", "glo", "ria", "tēpore", "Roma", "dns", "ꝓ", "uirumq;", "om#is", "-",
        "=", ".", ",", "(", ")", "]", "", "ōōō",
    ])
}

fn raw_lines() -> impl Strategy<Value = Vec<RawLine>> {
    prop::collection::vec(prop::collection::vec(fragment(), 0..6), 1..10).prop_map(|lines| {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, parts)| RawLine::new(format!("l{}", i + 1), parts.join(" ")))
            .collect()
    })
}

proptest! {
    #[test]
    fn abbreviation_resolution_is_idempotent(text in "[dnsqDNQ;ꝓ .a-e]{0,40}") {
        let normalizer = normalizer();
        let once = normalizer.abbreviations().resolve(&text);
        let twice = normalizer.abbreviations().resolve(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn line_count_is_preserved(lines in raw_lines()) {
        let normalizer = normalizer();
        let expected = lines.len();
        let page = normalizer.normalize_page(lines);

        prop_assert_eq!(page.len(), expected);
        for line in page.lines() {
            prop_assert!(!line.tokens().is_empty());
        }
    }

    #[test]
    fn identifiers_keep_their_order(lines in raw_lines()) {
        let normalizer = normalizer();
        let identifiers: Vec<String> = lines.iter().map(|l| l.identifier.clone()).collect();
        let page = normalizer.normalize_page(lines);

        let resolved: Vec<&str> = page.lines().iter().map(|l| l.identifier()).collect();
        prop_assert_eq!(resolved, identifiers);
    }

    #[test]
    fn sentinels_only_on_empty_lines(lines in raw_lines()) {
        let normalizer = normalizer();
        let page = normalizer.normalize_page(lines);

        for line in page.lines() {
            let sentinels = line.tokens().iter().filter(|t| t.kind == TokenKind::Empty).count();
            if sentinels > 0 {
                prop_assert_eq!(line.tokens().len(), 1);
                prop_assert_eq!(normalizer.render(line), "");
            }
        }
    }
}
