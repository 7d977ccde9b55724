//! Errors raised while building a language table.

use shade_lexer_core::SymbolTableError;
use thiserror::Error;

/// A custom language table could not be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("empty word in {group} group")]
    EmptyWord { group: &'static str },

    #[error("control keyword {0:?} is not a word")]
    InvalidControlKeyword(String),

    #[error("invalid symbol: {0}")]
    Symbol(#[from] SymbolTableError),
}
