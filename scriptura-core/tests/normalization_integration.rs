//! End-to-end tests for the normalization pipeline

use std::sync::Arc;

use scriptura_core::{
    extract_words, AbbreviationResolver, AutoSpacer, DictionaryLookup, LineBreakResolver,
    MacronResolver, Normalizer, RawLine, RawPage, ReplacementTable, TableLoader, Token,
    TokenKind, Tokenizer, WordJoiner, WordList,
};

const TABLE: &str = "\
pattern\treplacement\tnote
# scribal abbreviations
dns\tdominus\tnomen sacrum
xpc\tchristus\tnomen sacrum
q;\tque\tenclitic
ꝓ\tpro\t
tp̄\ttēp\tmacron kept for the dictionary
";

fn normalizer(words: &[&str]) -> Normalizer {
    let table = TableLoader::new().from_str(TABLE).unwrap();
    Normalizer::builder()
        .table(table)
        .dictionary(WordList::from_words(words.iter().copied()))
        .build()
        .unwrap()
}

#[test]
fn test_case_preservation() {
    let table = Arc::new(ReplacementTable::from_pairs([("dns", "dominus")]).unwrap());
    let resolver = AbbreviationResolver::new(table);

    assert_eq!(resolver.resolve("dns"), "dominus");
    assert_eq!(resolver.resolve("Dns"), "Dominus");
    assert_eq!(resolver.resolve("DNS"), "DOMINUS");
}

#[test]
fn test_tokenization() {
    let tokens = Tokenizer::new().tokenize("verbum.aliud");
    assert_eq!(
        tokens,
        vec![
            Token::word("verbum"),
            Token::punctuation("."),
            Token::word("aliud"),
        ]
    );

    let tokens = Tokenizer::new().tokenize("wo#rd");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Unreadable);
}

#[test]
fn test_macron_resolution() {
    let dictionary = Arc::new(WordList::from_words(["tempore"]));
    let resolver = MacronResolver::new(dictionary);

    assert_eq!(resolver.replace_macrons("tēpore"), "tempore");
    assert!(resolver.replace_macrons("tēpxre").contains('●'));
    assert!(resolver.replace_macrons("ōōōōōōōō").contains('●'));
}

#[test]
fn test_hyphenation_join_ignores_dictionary() {
    let normalizer = normalizer(&[]);
    let page = normalizer.normalize_page([
        RawLine::new("l1", "uenit in tem-"),
        RawLine::new("l2", "pusxyz illud"),
    ]);

    let first = page.lines()[0].tokens();
    assert_eq!(first.last(), Some(&Token::word("tempusxyz")));
    assert!(!first.iter().any(|t| t.text == "-"));
    assert_eq!(page.lines()[1].tokens(), &[Token::word("illud")]);
}

#[test]
fn test_hyphenation_join_keeps_unreadable_fragment() {
    let normalizer = normalizer(&[]);
    let page = normalizer.normalize_page([
        RawLine::new("l1", "uenit in ma-"),
        RawLine::new("l2", "#us est"),
    ]);

    assert_eq!(normalizer.render_page(&page), vec!["uenit in ma#us", "est"]);
    assert_eq!(page.lines()[0].tokens()[2].kind, TokenKind::Unreadable);
}

#[test]
fn test_conditional_join() {
    let lines = || {
        vec![
            RawLine::new("l1", "dixit et"),
            RawLine::new("l2", "cetera multa"),
        ]
    };

    let accepted = normalizer(&["etcetera"]).normalize_page(lines());
    assert_eq!(
        accepted.lines()[0].tokens().last(),
        Some(&Token::word("etcetera"))
    );
    assert_eq!(accepted.lines()[1].tokens(), &[Token::word("multa")]);

    let rejected = normalizer(&[]).normalize_page(lines());
    assert_eq!(rejected.lines()[0].tokens().last(), Some(&Token::word("et")));
    assert_eq!(rejected.lines()[1].tokens()[0], Token::word("cetera"));
}

#[test]
fn test_rendering() {
    let spacer = AutoSpacer::new();
    let tokens = [
        Token::word("Gallia"),
        Token::word("est"),
        Token::punctuation("."),
    ];
    assert_eq!(spacer.render_tokens(&tokens), "Gallia est.");

    let tokens = [
        Token::word("Gallia"),
        Token::punctuation("("),
        Token::word("omnis"),
        Token::punctuation(")"),
    ];
    assert_eq!(spacer.render_tokens(&tokens), "Gallia (omnis)");
}

#[test]
fn test_full_page() {
    let normalizer = normalizer(&["dominus", "tempore", "christus", "etcetera", "gloria"]);
    let page = normalizer.normalize_page([
        RawLine::new("r1l1", "In illo tp̄ore dixit dns"),
        RawLine::new("r1l2", "xpc, arma uirumq; et"),
        RawLine::new("r1l3", "cetera ꝓ glo-"),
        RawLine::new("r1l4", "ria."),
    ]);

    assert_eq!(
        normalizer.render_page(&page),
        vec![
            "In illo tempore dixit dominus",
            "christus, arma uirumque etcetera",
            "pro gloria.",
            "",
        ]
    );
    assert_eq!(page.lines()[3].identifier(), "r1l4");
}

#[test]
fn test_pages_are_independent() {
    let normalizer = normalizer(&["gloria"]);
    let pages = vec![
        RawPage::new(vec![RawLine::new("l1", "in glo-")]).with_identifier("f1r"),
        RawPage::new(vec![RawLine::new("l1", "ria patri")]).with_identifier("f1v"),
    ];

    let results = normalizer.normalize_pages(pages);
    let pages: Vec<_> = results.into_iter().map(|(page, _)| page).collect();
    assert_eq!(normalizer.render(&pages[0].lines()[0]), "in glo-");
    assert_eq!(normalizer.render(&pages[1].lines()[0]), "ria patri");

    let words: Vec<String> = extract_words(&pages, true)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        words,
        vec!["$$f1r", "$$l1", "in", "glo", "$$f1v", "$$l1", "ria", "patri"]
    );
}

#[test]
fn test_components_accept_custom_dictionary() {
    struct Suffixes;

    impl DictionaryLookup for Suffixes {
        fn check(&self, word: &str) -> Option<String> {
            word.ends_with("ibus").then(|| word.to_string())
        }
    }

    let dictionary: Arc<dyn DictionaryLookup> = Arc::new(Suffixes);
    let table = Arc::new(ReplacementTable::new());
    let joiner = WordJoiner::new(
        AbbreviationResolver::new(table),
        MacronResolver::new(dictionary.clone()),
        dictionary,
    );
    let resolver = LineBreakResolver::new(joiner.clone());

    assert_eq!(joiner.clean("omnībus"), "omni●bus");
    assert_eq!(joiner.clean("dōibus"), "domibus");

    let normalizer = Normalizer::builder()
        .table(ReplacementTable::new())
        .dictionary(Suffixes)
        .build()
        .unwrap();
    let page = normalizer.normalize_page([
        RawLine::new("l1", "cum om"),
        RawLine::new("l2", "nibus"),
    ]);
    let page = resolver.resolve_linebreaks(page);
    assert_eq!(normalizer.render(&page.lines()[0]), "cum omnibus");
}
