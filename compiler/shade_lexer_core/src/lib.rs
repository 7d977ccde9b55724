//! Low-level scanner for Shade.
//!
//! Turns shader source text into a lossless stream of typed tokens
//! (`word`, `number`, `symbol`, `whitespace`, `unknown`). Concatenating the
//! text of every token reproduces the line-ending-normalized source exactly.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: owns the normalized text plus a sentinel-terminated
//!   byte copy, so scanning loops never need explicit bounds checks.
//! - [`Cursor`]: character-class scanning primitives over the buffer, with a
//!   running line counter.
//! - [`Lexer`]: dispatches on the current byte and produces [`Token`]s,
//!   resolving punctuation through a longest-match [`SymbolTable`].
//!
//! Nothing here knows about keywords or categories; classification lives in
//! `shade_lang`, and the edit session in `shade_edit` builds on both.

mod cursor;
mod scanner;
mod source_buffer;
mod symbol;
mod tag;

pub use cursor::Cursor;
pub use scanner::{Lexer, Token};
pub use source_buffer::{normalize_line_endings, SourceBuffer};
pub use symbol::{SymbolClass, SymbolTable, SymbolTableError};
pub use tag::TokenKind;
