//! Lex a document into a generation of classified tokens.
//!
//! On top of the raw token stream this stage:
//!
//! - collapses `/* ... */` and `// ...` into single comment tokens,
//! - classifies words through the language table,
//! - chains same-text identifiers into a link ring,
//! - tracks zero-based line and byte column,
//! - flags tokens named by a diagnostic on their line.

use rustc_hash::FxHashMap;
use shade_lang::{Category, LanguageTable};
use shade_lexer_core::{Lexer, SourceBuffer, SymbolClass, TokenKind};

use crate::diagnostics::LineErrors;
use crate::token::{TokenArray, TokenFlags};

/// First and last occurrence of an identifier.
struct Chain {
    head: u32,
    tail: u32,
}

/// Fill `out` with the tokens of `source`. Returns the number of line feeds.
pub(crate) fn lex_into(
    out: &mut TokenArray,
    source: &SourceBuffer,
    table: &LanguageTable,
    whitespace_per_line: bool,
    errors: &LineErrors,
) -> u32 {
    out.clear();
    let mut lexer = Lexer::new(source, table.symbols()).whitespace_per_line(whitespace_per_line);
    let mut chains: FxHashMap<&str, Chain> = FxHashMap::default();

    loop {
        let line = lexer.line_count();
        let line_start = lexer.line_start();
        let Some(token) = lexer.next_token() else {
            break;
        };
        let (text, category) = match (token.symbol, token.text) {
            (Some(SymbolClass::CommentMarker), "/*") => {
                (lexer.finish_block_comment(&token), Category::Comment)
            }
            (Some(SymbolClass::CommentMarker), "//") => {
                (lexer.finish_line_comment(&token), Category::Comment)
            }
            (_, text) if token.kind == TokenKind::Word => (
                text,
                table
                    .category_of(text)
                    .map_or(Category::Word, Category::from),
            ),
            (_, text) => (text, Category::from(token.kind)),
        };

        let slot = out.push_slot();
        let index = slot.index;
        slot.text.push_str(text);
        slot.category = category;
        slot.symbol = token.symbol.filter(|_| category == Category::Symbol);
        slot.line = line;
        slot.col = token.start - line_start;
        if !category.is_trivia() && errors.mentions(line + 1, text) {
            slot.flags |= TokenFlags::ERROR;
        }

        if category == Category::Word {
            link_occurrence(out, &mut chains, text, index);
        }
    }
    lexer.line_count()
}

/// Add `index` to the ring of `text`: the previous tail points at it and it
/// points back at the head.
fn link_occurrence<'a>(
    out: &mut TokenArray,
    chains: &mut FxHashMap<&'a str, Chain>,
    text: &'a str,
    index: u32,
) {
    let tokens = out.as_mut_slice();
    match chains.get_mut(text) {
        None => {
            chains.insert(
                text,
                Chain {
                    head: index,
                    tail: index,
                },
            );
        }
        Some(chain) => {
            tokens[chain.tail as usize].link = Some(index);
            tokens[index as usize].link = Some(chain.head);
            chain.tail = index;
        }
    }
}
