//! Hand-written lexer producing typed tokens.
//!
//! The lexer dispatches on the current byte, in this order:
//!
//! 1. bytes `<= 0x20` → whitespace
//! 2. letters, `_`, `#` → word
//! 3. digits, `.`, and `+`/`-` when the previous significant token was not
//!    word-like → number (`.`, `..`, `...` come back out as symbols)
//! 4. longest match in the [`SymbolTable`] → symbol
//! 5. anything else → one character of unknown
//!
//! Rule 3 is what keeps `a-1` as three tokens while `= -1` keeps its sign:
//! after a word, a number or a closing bracket a sign is a binary operator.
//! Whitespace does not reset that memory.
//!
//! Comments are not recognized here. The lexer hands out `/*` and `//` as
//! comment-marker symbols and the caller decides whether to swallow the
//! comment body with [`Lexer::finish_block_comment`] or
//! [`Lexer::finish_line_comment`].

use crate::cursor::Cursor;
use crate::source_buffer::SourceBuffer;
use crate::symbol::{SymbolClass, SymbolTable};
use crate::tag::TokenKind;

/// One scanned token.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token<'a> {
    /// Exact source text of the token.
    pub text: &'a str,
    pub kind: TokenKind,
    /// Symbol class, set for [`TokenKind::Symbol`] when the table knows it.
    pub symbol: Option<SymbolClass>,
    /// Byte offset of the first byte in the normalized source.
    pub start: u32,
}

/// Lexer over one [`SourceBuffer`].
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    symbols: &'a SymbolTable,
    whitespace_per_line: bool,
    /// The previous significant token was a word, a number or a closer.
    last_was_word: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer at the start of `buffer`.
    pub fn new(buffer: &'a SourceBuffer, symbols: &'a SymbolTable) -> Self {
        Self {
            cursor: buffer.cursor(),
            symbols,
            whitespace_per_line: false,
            last_was_word: false,
        }
    }

    /// End whitespace runs after their first line feed.
    #[must_use]
    pub fn whitespace_per_line(mut self, per_line: bool) -> Self {
        self.whitespace_per_line = per_line;
        self
    }

    /// Number of line feeds consumed so far.
    pub fn line_count(&self) -> u32 {
        self.cursor.line_count()
    }

    /// Offset where the line holding the cursor begins.
    pub fn line_start(&self) -> u32 {
        self.cursor.line_start()
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.at_end() {
            return None;
        }
        let start = self.cursor.pos();
        let token = match self.cursor.byte() {
            0..=b' ' => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'#' => self.word(start),
            b'0'..=b'9' | b'.' => self.number(start),
            b'+' | b'-' if !self.last_was_word => self.number(start),
            _ => self.symbol_or_unknown(start),
        };
        Some(token)
    }

    /// Swallow a block comment whose `/*` opener was just returned.
    ///
    /// Consumes through the closing `*/`, or to EOF when unterminated, and
    /// returns the full comment text starting at the opener.
    pub fn finish_block_comment(&mut self, opener: &Token<'a>) -> &'a str {
        self.cursor.eat_through(b"*/");
        self.cursor.text_from(opener.start)
    }

    /// Swallow a line comment whose `//` opener was just returned.
    ///
    /// Stops before the line feed, which stays in the next whitespace token.
    pub fn finish_line_comment(&mut self, opener: &Token<'a>) -> &'a str {
        self.cursor.eat_until_newline_or_eof();
        self.cursor.text_from(opener.start)
    }

    // ─── Token classes ─────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> Token<'a> {
        let text = self.cursor.collect_whitespace(self.whitespace_per_line);
        Token {
            text,
            kind: TokenKind::Whitespace,
            symbol: None,
            start,
        }
    }

    fn word(&mut self, start: u32) -> Token<'a> {
        self.last_was_word = true;
        Token {
            text: self.cursor.collect_word(),
            kind: TokenKind::Word,
            symbol: None,
            start,
        }
    }

    fn number(&mut self, start: u32) -> Token<'a> {
        let snapshot = self.cursor;
        let text = self.cursor.collect_number();
        match text {
            // A sign with nothing after it is an operator (`-=`, `--`, `-x`).
            "+" | "-" => {
                self.cursor = snapshot;
                self.symbol_or_unknown(start)
            }
            "." | ".." | "..." => {
                self.last_was_word = false;
                Token {
                    text,
                    kind: TokenKind::Symbol,
                    symbol: self.symbols.get(text),
                    start,
                }
            }
            _ => {
                self.last_was_word = true;
                Token {
                    text,
                    kind: TokenKind::Number,
                    symbol: None,
                    start,
                }
            }
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "symbol widths are bounded by the table's small maximum"
    )]
    fn symbol_or_unknown(&mut self, start: u32) -> Token<'a> {
        if let Some((len, class)) = self.symbols.longest_match(self.cursor.rest()) {
            self.cursor.bump(len as u32);
            self.last_was_word = class == SymbolClass::Close;
            return Token {
                text: self.cursor.text_from(start),
                kind: TokenKind::Symbol,
                symbol: Some(class),
                start,
            };
        }
        self.cursor.bump_char();
        self.last_was_word = false;
        Token {
            text: self.cursor.text_from(start),
            kind: TokenKind::Unknown,
            symbol: None,
            start,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
