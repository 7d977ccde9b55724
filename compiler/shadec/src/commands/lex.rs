//! `shade lex`: print the token stream of a file.

use std::fmt::Write as _;

use shade_edit::{ClassifiedToken, EditSession, EditorConfig};
use shade_lexer_core::{Lexer, SourceBuffer};

use super::{glsl, read_file};

/// Lex `path` and print one token per line.
///
/// With `raw`, prints the scanner output before classification, comment
/// folding and indentation. Returns `false` on failure.
pub fn lex_file(path: &str, raw: bool) -> bool {
    let content = match read_file(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {e}");
            return false;
        }
    };
    if raw {
        print!("{}", render_raw_tokens(&content));
        return true;
    }

    let mut session = match EditSession::new(glsl(), EditorConfig::default()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            return false;
        }
    };
    session.load(&content);
    let tokens = session.tokens();
    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    print!("{}", render_tokens(tokens));
    true
}

/// One line per token: index, category, one-based position, link, text.
pub fn render_tokens(tokens: &[ClassifiedToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        let link = token
            .link
            .map_or_else(|| "-".to_owned(), |link| link.to_string());
        let error = if token.is_error() { " error" } else { "" };
        let _ = writeln!(
            out,
            "{:>5} {:<12} {:>4}:{:<3} -> {:<5} {:?}{}",
            token.index,
            token.category.name(),
            token.line + 1,
            token.col + 1,
            link,
            token.text,
            error
        );
    }
    out
}

/// Scanner tokens of `source`: kind, symbol class, byte offset, text.
pub fn render_raw_tokens(source: &str) -> String {
    let table = glsl();
    let buffer = SourceBuffer::new(source);
    let mut out = String::new();
    for token in Lexer::new(&buffer, table.symbols()) {
        let symbol = token.symbol.map_or("", |class| class.name());
        let _ = writeln!(
            out,
            "{:>6} {:<10} {:<12} {:?}",
            token.start,
            token.kind.name(),
            symbol,
            token.text
        );
    }
    out
}
