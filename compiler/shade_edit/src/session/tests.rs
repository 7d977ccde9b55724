use std::sync::Arc;

use pretty_assertions::assert_eq;
use shade_lang::{Category, LanguageTable, WordCategory};

use super::*;

fn session() -> EditSession {
    EditSession::new(Arc::new(LanguageTable::glsl()), EditorConfig::default()).unwrap()
}

// === splice ===

#[test]
fn splice_folds_crlf_before_caret() {
    assert_eq!(splice("a\r\nb", 3, None), ("a\nb".to_owned(), 2));
    assert_eq!(splice("a\r\nb\r\n", 6, None), ("a\nb\n".to_owned(), 4));
}

#[test]
fn splice_caret_between_cr_and_lf() {
    assert_eq!(splice("a\r\nb", 2, None), ("a\nb".to_owned(), 1));
}

#[test]
fn splice_clamps_caret() {
    assert_eq!(splice("abc", 99, None), ("abc".to_owned(), 3));
    // Inside the two bytes of `é`.
    assert_eq!(
        splice("héllo", 2, Some(&Edit::insert("x"))),
        ("hxéllo".to_owned(), 2)
    );
}

#[test]
fn splice_clamps_deletion() {
    assert_eq!(splice("abc", 1, Some(&Edit::delete(10))), ("a".to_owned(), 1));
    assert_eq!(splice("aéb", 0, Some(&Edit::delete(2))), ("b".to_owned(), 0));
}

#[test]
fn splice_normalizes_inserted_text() {
    assert_eq!(
        splice("ab", 1, Some(&Edit::insert("\r\nx"))),
        ("a\nxb".to_owned(), 3)
    );
}

#[test]
fn splice_replaces_selection() {
    assert_eq!(
        splice("x = 1;", 4, Some(&Edit::replace(1, "42"))),
        ("x = 42;".to_owned(), 6)
    );
}

// === Session ===

#[test]
fn invalid_config_is_rejected() {
    let config = EditorConfig {
        indent_unit: 0,
        ..EditorConfig::default()
    };
    let err = EditSession::new(Arc::new(LanguageTable::glsl()), config).err();
    assert_eq!(err, Some(ConfigError::ZeroIndent));
}

#[test]
fn first_parse_changes_everything() {
    let mut session = session();
    let outcome = session.parse("", 0, Some(&Edit::insert("int a;")));
    assert_eq!(outcome.diff, TokenDiff::AllChanged);
    assert_eq!(outcome.caret_offset, 6);
    assert_eq!(outcome.caret, Some(CaretPosition { index: 3, offset: 1 }));
    assert_eq!(session.text(), "int a;");
}

#[test]
fn empty_document_has_no_caret() {
    let mut session = session();
    let outcome = session.parse("", 0, None);
    assert_eq!(outcome.diff, TokenDiff::AllChanged);
    assert_eq!(outcome.caret, None);
    assert!(session.tokens().is_empty());
}

#[test]
fn typing_a_character_diffs_locally() {
    let mut session = session();
    session.load("float a;\nfloat b;\nfloat c;\nfloat d;");
    let text = session.text();
    // Rename `b` to `bb`.
    let outcome = session.parse(&text, 16, Some(&Edit::insert("b")));
    assert_eq!(session.text(), "float a;\nfloat bb;\nfloat c;\nfloat d;");
    let TokenDiff::Changed { new, current } = outcome.diff else {
        panic!("expected a local change, got {:?}", outcome.diff);
    };
    assert_eq!(new, current);
    assert!(new.contains(&7));
    assert!(new.len() <= 5);
    assert_eq!(outcome.caret_offset, 17);
}

#[test]
fn load_is_a_no_op_for_the_same_text() {
    let mut session = session();
    assert!(session.load("int a;").is_some());
    assert_eq!(session.load("int a;"), None);
    let outcome = session.load("int a;\r\n").unwrap();
    assert_eq!(outcome.line_count, 1);
    assert_eq!(session.load("int a;\n"), None);
}

#[test]
fn load_reports_line_count_and_no_caret() {
    let mut session = session();
    let outcome = session.load("a;\nb;\nc;").unwrap();
    assert_eq!(outcome.line_count, 2);
    assert_eq!(outcome.caret, None);
    assert_eq!(session.line_count(), 2);
}

#[test]
fn parse_reindents_and_moves_caret() {
    let mut session = session();
    session.load("void f() {\n}");
    // Type a statement on a new line inside the block.
    let outcome = session.parse("void f() {\n}", 11, Some(&Edit::insert("x();\n")));
    assert_eq!(session.text(), "void f() {\n  x();\n}");
    assert_eq!(outcome.caret_offset, 18);
    assert_eq!(outcome.line_count, 2);
}

#[test]
fn language_switch_forces_full_redraw() {
    let mut session = session();
    session.load("int a;");
    session.set_language_table(Arc::new(LanguageTable::glsl()));
    let outcome = session.parse("int a;", 6, None);
    assert_eq!(outcome.diff, TokenDiff::AllChanged);
    let outcome = session.parse("int a;", 6, None);
    assert_eq!(outcome.diff, TokenDiff::Unchanged);
}

#[test]
fn reloading_same_text_after_language_switch_relexes() {
    let mut session = session();
    assert!(session.load("foo bar").is_some());
    assert_eq!(session.tokens()[0].category, Category::Word);

    let table = LanguageTable::builder(1)
        .words(WordCategory::Type, &[("foo", 1)])
        .build()
        .unwrap();
    session.set_language_table(Arc::new(table));
    let outcome = session.load("foo bar").unwrap();
    assert_eq!(outcome.diff, TokenDiff::AllChanged);
    assert_eq!(session.tokens()[0].category, Category::Type);

    assert!(session.load("foo bar").is_none());
}

#[test]
fn line_errors_flag_named_tokens() {
    let mut session = session();
    session.load("int y;\nx = 1;");
    let mut errors = LineErrors::new();
    errors.insert(2, 1, "'x' : undeclared identifier");
    session.set_line_errors(errors);

    session.parse("int y;\nx = 1;", 0, None);
    let flagged: Vec<&str> = session
        .tokens()
        .iter()
        .filter(|t| t.is_error())
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(flagged, ["x"]);

    // Loading a new document drops them.
    session.load("int y;\nx = 2;");
    assert!(session.line_errors().is_empty());
    assert!(session.tokens().iter().all(|t| !t.is_error()));
}

#[test]
fn highlight_follows_links() {
    let mut session = session();
    session.load("int a; a = a + 1;");
    // Offset 4 is the start of the first `a`.
    assert_eq!(session.highlight_at(4), 3);
    let highlighted: Vec<&str> = session
        .tokens()
        .iter()
        .filter(|t| t.is_highlighted())
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(highlighted, ["a", "a", "a"]);
    assert_eq!(session.highlight_at(0), 0);
}

#[test]
fn caret_at_token_end_highlights_next_token() {
    let mut session = session();
    session.load("f(x)");
    // Offset 1 sits between `f` and `(`.
    assert_eq!(session.highlight_at(1), 2);
}

#[test]
fn linked_jumps_to_matching_bracket() {
    let mut session = session();
    session.load("f(x)");
    assert_eq!(session.linked(1), Some(3));
    assert_eq!(session.linked(3), Some(1));
    assert_eq!(session.linked(0), None);
    assert_eq!(session.linked(42), None);
    assert_eq!(session.token_offset(3), Some(3));
    assert_eq!(session.token_offset(4), None);
}

#[test]
fn caret_location_for_status_bar() {
    let mut session = session();
    session.load("int a;\nfloat b;");
    assert_eq!(session.caret_location(0), Some((1, 1)));
    assert_eq!(session.caret_location(7), Some((2, 1)));
    assert_eq!(session.caret_location(13), Some((2, 7)));
}

#[test]
fn categories_reach_the_host() {
    let mut session = session();
    session.load("void main(){}");
    assert_eq!(session.tokens()[0].category, Category::Reserved);
    assert_eq!(session.tokens()[2].category, Category::Word);
}

#[test]
fn format_source_reindents() {
    let formatted = format_source(
        "void main() {\r\nif (a) {\r\nx();\r\n}\r\n}",
        Arc::new(LanguageTable::glsl()),
        EditorConfig {
            indent_unit: 4,
            ..EditorConfig::default()
        },
    )
    .unwrap();
    assert_eq!(formatted, "void main() {\n    if (a) {\n        x();\n    }\n}");
}

#[test]
fn buffers_are_reused_between_parses() {
    let mut session = session();
    for _ in 0..4 {
        session.parse("int a;", 0, Some(&Edit::insert("x")));
    }
    assert_eq!(session.current.capacity(), crate::token::GROW_CHUNK);
    assert_eq!(session.next.capacity(), crate::token::GROW_CHUNK);
}
