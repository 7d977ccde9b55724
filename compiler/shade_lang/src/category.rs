//! Semantic token categories.

use std::fmt;

use shade_lexer_core::TokenKind;

/// Category of a word in a [`LanguageTable`](crate::LanguageTable).
///
/// Declaration order is the order groups are applied when building the
/// GLSL table: a word listed in two groups keeps the later one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WordCategory {
    /// Preprocessor directives (`#define`, `#ifdef`, ...).
    PreProcess,
    /// Keywords and qualifiers (`if`, `uniform`, `void`, ...).
    Reserved,
    /// Scalar types and `struct`.
    ReservedType,
    /// `true` and `false`.
    Const,
    /// Vector, matrix and sampler types.
    Type,
    /// Built-in functions.
    Function,
    /// Reserved for future use by the language.
    Other,
}

impl WordCategory {
    pub const fn name(self) -> &'static str {
        match self {
            WordCategory::PreProcess => "pre_process",
            WordCategory::Reserved => "reserved",
            WordCategory::ReservedType => "reserved_type",
            WordCategory::Const => "const",
            WordCategory::Type => "type",
            WordCategory::Function => "function",
            WordCategory::Other => "other",
        }
    }
}

/// Category of a classified token.
///
/// Words found in the language table carry their [`WordCategory`];
/// comments get [`Category::Comment`]; everything else keeps the
/// [`TokenKind`] it was scanned as.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    Reserved,
    ReservedType,
    Type,
    Function,
    Const,
    PreProcess,
    Other,
    Comment,
    Word,
    Number,
    Symbol,
    Whitespace,
    Unknown,
}

impl Category {
    pub const fn name(self) -> &'static str {
        match self {
            Category::Reserved => "reserved",
            Category::ReservedType => "reserved_type",
            Category::Type => "type",
            Category::Function => "function",
            Category::Const => "const",
            Category::PreProcess => "pre_process",
            Category::Other => "other",
            Category::Comment => "comment",
            Category::Word => "word",
            Category::Number => "number",
            Category::Symbol => "symbol",
            Category::Whitespace => "whitespace",
            Category::Unknown => "unknown",
        }
    }

    /// Whitespace and comments; skipped by lookahead and indentation.
    pub const fn is_trivia(self) -> bool {
        matches!(self, Category::Whitespace | Category::Comment)
    }
}

impl From<WordCategory> for Category {
    fn from(category: WordCategory) -> Self {
        match category {
            WordCategory::PreProcess => Category::PreProcess,
            WordCategory::Reserved => Category::Reserved,
            WordCategory::ReservedType => Category::ReservedType,
            WordCategory::Const => Category::Const,
            WordCategory::Type => Category::Type,
            WordCategory::Function => Category::Function,
            WordCategory::Other => Category::Other,
        }
    }
}

impl From<TokenKind> for Category {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Word => Category::Word,
            TokenKind::Number => Category::Number,
            TokenKind::Symbol => Category::Symbol,
            TokenKind::Whitespace => Category::Whitespace,
            TokenKind::Unknown => Category::Unknown,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
