//! Token kinds produced by the scanner.

use std::fmt;

/// Coarse kind of a scanned token.
///
/// Kinds describe how the text was scanned, not what it means: `float` and
/// `x` are both [`TokenKind::Word`]. Meaning is assigned later by the
/// language table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `[A-Za-z_#][A-Za-z0-9_#]*`
    Word,
    /// Numeric literal, possibly signed, possibly with an exponent.
    Number,
    /// Punctuation matched in the symbol table.
    Symbol,
    /// Run of bytes `<= 0x20`.
    Whitespace,
    /// A single character matching no other rule.
    Unknown,
}

impl TokenKind {
    /// Lowercase name, as used in category names and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
