//! Word and symbol classification.

use rustc_hash::{FxHashMap, FxHashSet};
use shade_lexer_core::{SymbolClass, SymbolTable};

use crate::{LanguageError, WordCategory};

/// Classification of one word.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct WordEntry {
    pub category: WordCategory,
    /// Sub-group within the category. Used for grouping only.
    pub rank: u8,
}

/// Immutable word, symbol and control-keyword tables for one language.
#[derive(Clone, Debug)]
pub struct LanguageTable {
    words: FxHashMap<Box<str>, WordEntry>,
    /// Longest word in `words`, for fast rejection of long identifiers.
    max_word_len: usize,
    control: FxHashSet<Box<str>>,
    symbols: SymbolTable,
}

impl LanguageTable {
    /// The built-in GLSL ES 3.0 table.
    pub fn glsl() -> Self {
        crate::glsl::table()
    }

    /// Start a custom table whose symbols may be up to `max_symbol_len`
    /// bytes wide.
    pub fn builder(max_symbol_len: usize) -> LanguageTableBuilder {
        LanguageTableBuilder {
            table: LanguageTable::from_parts(SymbolTable::with_max_len(max_symbol_len)),
            error: None,
        }
    }

    pub(crate) fn from_parts(symbols: SymbolTable) -> Self {
        Self {
            words: FxHashMap::default(),
            max_word_len: 0,
            control: FxHashSet::default(),
            symbols,
        }
    }

    /// Add a word; a word added twice keeps the later entry.
    pub(crate) fn insert_word(&mut self, word: &str, entry: WordEntry) {
        self.max_word_len = self.max_word_len.max(word.len());
        self.words.insert(word.into(), entry);
    }

    pub(crate) fn insert_control(&mut self, word: &str) {
        self.control.insert(word.into());
    }

    /// Look up a word.
    #[inline]
    pub fn word(&self, text: &str) -> Option<WordEntry> {
        if text.is_empty() || text.len() > self.max_word_len {
            return None;
        }
        self.words.get(text).copied()
    }

    /// Category of a word, if the table knows it.
    #[inline]
    pub fn category_of(&self, text: &str) -> Option<WordCategory> {
        self.word(text).map(|entry| entry.category)
    }

    /// Whether `text` opens an indentation frame (`if`, `while`, ...).
    pub fn is_control_keyword(&self, text: &str) -> bool {
        self.control.contains(text)
    }

    /// Punctuation table used by the lexer.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Iterate over all words in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = (&str, WordEntry)> {
        self.words.iter().map(|(word, &entry)| (&**word, entry))
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Builder for custom language tables.
///
/// Errors are deferred: the first invalid entry is remembered and reported
/// by [`LanguageTableBuilder::build`].
#[derive(Debug)]
pub struct LanguageTableBuilder {
    table: LanguageTable,
    error: Option<LanguageError>,
}

impl LanguageTableBuilder {
    /// Add a group of `(word, rank)` pairs under one category.
    #[must_use]
    pub fn words(mut self, category: WordCategory, words: &[(&str, u8)]) -> Self {
        for &(word, rank) in words {
            if word.is_empty() {
                self.fail(LanguageError::EmptyWord {
                    group: category.name(),
                });
                continue;
            }
            self.table.insert_word(word, WordEntry { category, rank });
        }
        self
    }

    /// Add one symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: &str, class: SymbolClass) -> Self {
        if let Err(err) = self.table.symbols.insert(symbol, class) {
            self.fail(err.into());
        }
        self
    }

    /// Mark words as control keywords.
    #[must_use]
    pub fn control_keywords(mut self, words: &[&str]) -> Self {
        for &word in words {
            let is_word = !word.is_empty()
                && word
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'#');
            if is_word {
                self.table.insert_control(word);
            } else {
                self.fail(LanguageError::InvalidControlKeyword(word.to_owned()));
            }
        }
        self
    }

    pub fn build(self) -> Result<LanguageTable, LanguageError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.table),
        }
    }

    fn fail(&mut self, err: LanguageError) {
        self.error.get_or_insert(err);
    }
}
