//! Language classification tables for Shade.
//!
//! A [`LanguageTable`] answers two questions the edit session asks about
//! every token: which semantic [`WordCategory`] a word belongs to, and which
//! [`SymbolClass`](shade_lexer_core::SymbolClass) a piece of punctuation
//! has. It also names the control keywords that open indentation frames.
//!
//! Tables are immutable once built and are meant to be shared behind an
//! `Arc`. [`LanguageTable::glsl`] returns the built-in GLSL ES 3.0 table;
//! [`LanguageTable::builder`] assembles custom ones.

mod category;
mod error;
mod glsl;
mod table;

pub use category::{Category, WordCategory};
pub use error::LanguageError;
pub use table::{LanguageTable, LanguageTableBuilder, WordEntry};
