use shade_lang::LanguageTable;
use shade_lexer_core::SourceBuffer;

use super::*;
use crate::classify::lex_into;
use crate::diagnostics::LineErrors;
use crate::indent::reindent;
use crate::token::TokenArray;

fn tokens(source: &str) -> TokenArray {
    let table = LanguageTable::glsl();
    let buffer = SourceBuffer::new(source);
    let mut tokens = TokenArray::new();
    lex_into(&mut tokens, &buffer, &table, true, &LineErrors::new());
    reindent(tokens.as_mut_slice(), &table, 2, 0);
    tokens
}

fn highlighted(tokens: &TokenArray) -> Vec<u32> {
    tokens
        .iter()
        .filter(|t| t.is_highlighted())
        .map(|t| t.index)
        .collect()
}

#[test]
fn identifier_ring_is_fully_highlighted() {
    let mut tokens = tokens("a b a c a");
    // Start from the middle occurrence.
    assert_eq!(highlight_chain(tokens.as_mut_slice(), 4), 3);
    assert_eq!(highlighted(&tokens), [0, 4, 8]);
}

#[test]
fn bracket_pair_is_highlighted() {
    let mut tokens = tokens("f(x)");
    assert_eq!(highlight_chain(tokens.as_mut_slice(), 3), 2);
    assert_eq!(highlighted(&tokens), [1, 3]);
}

#[test]
fn unlinked_token_clears_highlights() {
    let mut tokens = tokens("f(x)");
    highlight_chain(tokens.as_mut_slice(), 1);
    assert_eq!(highlight_chain(tokens.as_mut_slice(), 0), 0);
    assert!(highlighted(&tokens).is_empty());
}

#[test]
fn out_of_range_index_highlights_nothing() {
    let mut tokens = tokens("f(x)");
    assert_eq!(highlight_chain(tokens.as_mut_slice(), 99), 0);
}

#[test]
fn caret_at_token_end_moves_to_next_token() {
    let tokens = tokens("int a;");
    let end_of_int = CaretPosition { index: 0, offset: 3 };
    assert_eq!(
        normalize_caret(tokens.as_slice(), end_of_int),
        CaretPosition { index: 1, offset: 0 }
    );
    let inside = CaretPosition { index: 0, offset: 1 };
    assert_eq!(normalize_caret(tokens.as_slice(), inside), inside);
    let end = CaretPosition { index: 3, offset: 1 };
    assert_eq!(normalize_caret(tokens.as_slice(), end), end);
}

#[test]
fn caret_location_is_one_based() {
    let tokens = tokens("int a;\nfloat b;");
    // `b` is token 7 on the second line, column 6.
    let b = CaretPosition { index: 7, offset: 0 };
    assert_eq!(tokens[7].text, "b");
    assert_eq!(caret_location(tokens.as_slice(), b), Some((2, 7)));
    let in_int = CaretPosition { index: 0, offset: 2 };
    assert_eq!(caret_location(tokens.as_slice(), in_int), Some((1, 3)));
}

#[test]
fn caret_location_inside_multiline_token() {
    let tokens = tokens("/* a\nbc */");
    let caret = CaretPosition { index: 0, offset: 7 };
    assert_eq!(caret_location(tokens.as_slice(), caret), Some((2, 3)));
    assert_eq!(
        caret_location(tokens.as_slice(), CaretPosition { index: 5, offset: 0 }),
        None
    );
}
