//! Longest-match symbol table.
//!
//! Maps literal punctuation (`+=`, `&&`, `/*`, ...) to a coarse
//! [`SymbolClass`]. The scanner tries every width from the table's maximum
//! down to 1 at the current position and takes the first hit, so `<<=`
//! wins over `<<`, which wins over `<`.

use std::fmt;

use rustc_hash::FxHashMap;

/// Coarse punctuation class.
///
/// The indentation pass cares about classes, not literal text: every
/// assignment operator opens the same kind of frame, every terminator closes
/// pending frames.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolClass {
    /// Statement terminator (`;`).
    Terminator,
    /// List separator (`,`).
    Separator,
    /// Opening bracket (`(`, `{`, `[`).
    Open,
    /// Closing bracket (`)`, `}`, `]`).
    Close,
    /// Arithmetic and unary operators (`+`, `-`, `*`, `/`, `%`, `!`, `++`, `--`).
    Arithmetic,
    /// Assignment operators (`=`, `+=`, `-=`, `*=`, `/=`).
    Assign,
    /// Comparison, logical and selection operators (`==`, `&&`, `<`, `?`, `:`).
    Compare,
    /// Bitwise operators (`&`, `|`, `^`, `<<`, `>>`).
    Bitwise,
    /// Comment delimiters (`//`, `/*`, `*/`).
    CommentMarker,
    /// Member access and ellipsis (`.`, `..`, `...`).
    Dot,
}

impl SymbolClass {
    /// Short tag for CLI output and debugging.
    pub const fn name(self) -> &'static str {
        match self {
            SymbolClass::Terminator => "terminator",
            SymbolClass::Separator => "separator",
            SymbolClass::Open => "open",
            SymbolClass::Close => "close",
            SymbolClass::Arithmetic => "arithmetic",
            SymbolClass::Assign => "assign",
            SymbolClass::Compare => "compare",
            SymbolClass::Bitwise => "bitwise",
            SymbolClass::CommentMarker => "comment-marker",
            SymbolClass::Dot => "dot",
        }
    }
}

/// Error when a symbol cannot be added to a [`SymbolTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolTableError {
    /// The empty string can never be matched.
    Empty,
    /// The symbol is wider than the table's maximum match width.
    TooLong { symbol: String, max_len: usize },
}

impl fmt::Display for SymbolTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolTableError::Empty => f.write_str("empty symbol"),
            SymbolTableError::TooLong { symbol, max_len } => write!(
                f,
                "symbol {symbol:?} is longer than the maximum width of {max_len}"
            ),
        }
    }
}

impl std::error::Error for SymbolTableError {}

/// Literal punctuation → [`SymbolClass`], with longest-match lookup.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: FxHashMap<Box<str>, SymbolClass>,
    max_len: usize,
}

impl SymbolTable {
    /// Create an empty table accepting symbols up to `max_len` bytes wide.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            max_len,
        }
    }

    /// Add a symbol. Re-adding a symbol replaces its class.
    pub fn insert(&mut self, symbol: &str, class: SymbolClass) -> Result<(), SymbolTableError> {
        if symbol.is_empty() {
            return Err(SymbolTableError::Empty);
        }
        if symbol.len() > self.max_len {
            return Err(SymbolTableError::TooLong {
                symbol: symbol.to_owned(),
                max_len: self.max_len,
            });
        }
        self.entries.insert(symbol.into(), class);
        Ok(())
    }

    /// Exact lookup.
    pub fn get(&self, symbol: &str) -> Option<SymbolClass> {
        self.entries.get(symbol).copied()
    }

    /// Longest symbol that prefixes `rest`.
    ///
    /// Returns the matched width in bytes and its class. Widths that would
    /// split a multi-byte character are skipped.
    pub fn longest_match(&self, rest: &str) -> Option<(usize, SymbolClass)> {
        let widest = self.max_len.min(rest.len());
        (1..=widest).rev().find_map(|len| {
            let candidate = rest.get(..len)?;
            self.entries.get(candidate).map(|&class| (len, class))
        })
    }

    /// Maximum match width in bytes.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(symbol, class)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SymbolClass)> {
        self.entries.iter().map(|(symbol, &class)| (&**symbol, class))
    }
}

/// Collects a table whose maximum width is the widest symbol seen.
///
/// Empty symbols are skipped.
impl<'s> FromIterator<(&'s str, SymbolClass)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (&'s str, SymbolClass)>>(iter: I) -> Self {
        let mut table = SymbolTable::default();
        for (symbol, class) in iter {
            if symbol.is_empty() {
                continue;
            }
            table.max_len = table.max_len.max(symbol.len());
            table.entries.insert(symbol.into(), class);
        }
        table
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
