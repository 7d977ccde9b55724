//! The edit session: one document, two token generations.

use std::sync::Arc;
use std::time::Instant;

use shade_lang::LanguageTable;
use shade_lexer_core::{normalize_line_endings, SourceBuffer};

use crate::caret::{caret_offset, locate_caret, CaretPosition};
use crate::classify::lex_into;
use crate::config::{ConfigError, EditorConfig};
use crate::diagnostics::LineErrors;
use crate::diff::{diff_tokens, DiffOptions, TokenDiff};
use crate::highlight::{caret_location, highlight_chain, normalize_caret};
use crate::indent::reindent;
use crate::token::{ClassifiedToken, TokenArray};

/// A single text change at the caret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Edit {
    /// Text inserted at the caret.
    pub insert: String,
    /// Bytes removed after the caret before inserting.
    pub delete_len: usize,
}

impl Edit {
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            insert: text.into(),
            delete_len: 0,
        }
    }

    pub fn delete(len: usize) -> Self {
        Self {
            insert: String::new(),
            delete_len: len,
        }
    }

    pub fn replace(len: usize, text: impl Into<String>) -> Self {
        Self {
            insert: text.into(),
            delete_len: len,
        }
    }
}

/// What a host needs after a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Token ranges to redraw.
    pub diff: TokenDiff,
    /// Caret as token index and offset, `None` for an empty document.
    pub caret: Option<CaretPosition>,
    /// Caret as a byte offset into the formatted text.
    pub caret_offset: usize,
    /// Line feeds in the document.
    pub line_count: u32,
}

/// Owns the current generation of a document and turns edits into diffs.
///
/// The "current" and "new" token arrays are swapped after every parse, so
/// their slots are reused and never shrink.
pub struct EditSession {
    table: Arc<LanguageTable>,
    config: EditorConfig,
    current: TokenArray,
    next: TokenArray,
    line_errors: LineErrors,
    force_all_changed: bool,
    line_count: u32,
}

impl EditSession {
    /// Create an empty session.
    ///
    /// # Errors
    ///
    /// Returns the validation error of an invalid `config`.
    pub fn new(table: Arc<LanguageTable>, config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            table,
            config,
            current: TokenArray::new(),
            next: TokenArray::new(),
            line_errors: LineErrors::new(),
            force_all_changed: false,
            line_count: 0,
        })
    }

    /// Apply `edit` at byte offset `caret` of `source` and re-parse.
    ///
    /// Carriage returns are folded out of both `source` and the inserted
    /// text. `caret` is clamped to the document and to a character
    /// boundary; the deleted span is clamped the same way.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(source_len = source.len(), caret, edited = edit.is_some())
    )]
    pub fn parse(&mut self, source: &str, caret: usize, edit: Option<&Edit>) -> ParseOutcome {
        let started = Instant::now();
        let (text, caret) = splice(source, caret, edit);
        self.reparse(&text, caret, started)
    }

    /// Replace the whole document. No caret, and diagnostics are cleared.
    ///
    /// Returns `None` without touching anything when `source` is already
    /// the current text and the language table has not changed since.
    pub fn load(&mut self, source: &str) -> Option<ParseOutcome> {
        let text = normalize_line_endings(source);
        if !self.force_all_changed && !self.current.is_empty() && self.text() == text {
            tracing::debug!("load skipped, text unchanged");
            return None;
        }
        self.line_errors = LineErrors::new();
        let mut outcome = self.reparse(&text, 0, Instant::now());
        outcome.caret = None;
        outcome.caret_offset = 0;
        Some(outcome)
    }

    fn reparse(&mut self, text: &str, caret: usize, started: Instant) -> ParseOutcome {
        let buffer = SourceBuffer::new(text);
        let line_count = lex_into(
            &mut self.next,
            &buffer,
            &self.table,
            self.config.whitespace_per_line,
            &self.line_errors,
        );
        let indent = reindent(
            self.next.as_mut_slice(),
            &self.table,
            self.config.indent_unit,
            caret,
        );

        let diff = if std::mem::take(&mut self.force_all_changed) {
            TokenDiff::AllChanged
        } else {
            diff_tokens(
                self.next.as_slice(),
                self.current.as_slice(),
                &self.diff_options(),
            )
        };
        let position = locate_caret(self.next.as_slice(), indent.caret);

        std::mem::swap(&mut self.current, &mut self.next);
        self.line_count = line_count;

        let elapsed = started.elapsed();
        tracing::debug!(
            tokens = self.current.len(),
            lines = line_count,
            ?diff,
            elapsed_us = elapsed.as_micros(),
            "parsed"
        );
        if elapsed.as_millis() > u128::from(self.config.slow_parse_ms) {
            tracing::warn!(
                elapsed_ms = elapsed.as_millis(),
                tokens = self.current.len(),
                "slow parse"
            );
        }

        ParseOutcome {
            diff,
            caret: position,
            caret_offset: indent.caret,
            line_count,
        }
    }

    fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            margin: self.config.diff_margin,
            tail_refresh: self.config.tail_refresh,
        }
    }

    /// The formatted document.
    pub fn text(&self) -> String {
        self.current.text()
    }

    /// The current generation.
    pub fn tokens(&self) -> &[ClassifiedToken] {
        self.current.as_slice()
    }

    /// Line feeds in the current document.
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn language_table(&self) -> &Arc<LanguageTable> {
        &self.table
    }

    /// Switch languages. The next parse reports [`TokenDiff::AllChanged`].
    pub fn set_language_table(&mut self, table: Arc<LanguageTable>) {
        self.table = table;
        self.force_all_changed = true;
    }

    /// Diagnostics applied from the next parse on.
    pub fn set_line_errors(&mut self, errors: LineErrors) {
        self.line_errors = errors;
    }

    pub fn line_errors(&self) -> &LineErrors {
        &self.line_errors
    }

    /// Highlight the link chain of the token under byte offset `caret`.
    /// Returns the number of highlighted tokens.
    pub fn highlight_at(&mut self, caret: usize) -> usize {
        let Some(position) = locate_caret(self.current.as_slice(), caret) else {
            return 0;
        };
        let position = normalize_caret(self.current.as_slice(), position);
        highlight_chain(self.current.as_mut_slice(), position.index as usize)
    }

    /// Link target of token `index`: the matching bracket, the frame a `;`
    /// closes, or the next occurrence of an identifier.
    pub fn linked(&self, index: usize) -> Option<usize> {
        self.current
            .get(index)?
            .link
            .map(|link| link as usize)
    }

    /// Byte offset where token `index` starts, for jumping to a link.
    pub fn token_offset(&self, index: usize) -> Option<usize> {
        let index_u32 = u32::try_from(index).ok()?;
        (index < self.current.len()).then(|| {
            caret_offset(
                self.current.as_slice(),
                CaretPosition {
                    index: index_u32,
                    offset: 0,
                },
            )
        })
    }

    /// One-based `(line, column)` of byte offset `caret`.
    pub fn caret_location(&self, caret: usize) -> Option<(u32, u32)> {
        let position = locate_caret(self.current.as_slice(), caret)?;
        let position = normalize_caret(self.current.as_slice(), position);
        caret_location(self.current.as_slice(), position)
    }
}

/// Format `source` in one shot.
///
/// # Errors
///
/// Returns the validation error of an invalid `config`.
pub fn format_source(
    source: &str,
    table: Arc<LanguageTable>,
    config: EditorConfig,
) -> Result<String, ConfigError> {
    let mut session = EditSession::new(table, config)?;
    session.load(source);
    Ok(session.text())
}

/// Normalize `source`, map `caret` into the normalized text and apply
/// `edit`. Returns the new text and the caret after the insertion.
fn splice(source: &str, caret: usize, edit: Option<&Edit>) -> (String, usize) {
    let caret = floor_char_boundary(source, caret.min(source.len()));
    let before = &source[..caret];
    let mut folded = before.matches("\r\n").count();
    // Between `\r` and `\n`: the pair becomes one `\n` in front of the caret.
    if before.ends_with('\r') && source[caret..].starts_with('\n') {
        folded += 1;
    }
    let mut caret = caret - folded;
    let mut text = normalize_line_endings(source).into_owned();

    if let Some(edit) = edit {
        let end = ceil_char_boundary(&text, caret.saturating_add(edit.delete_len).min(text.len()));
        let insert = normalize_line_endings(&edit.insert);
        text.replace_range(caret..end, &insert);
        caret += insert.len();
    }
    (text, caret)
}

fn floor_char_boundary(text: &str, mut ix: usize) -> usize {
    while !text.is_char_boundary(ix) {
        ix -= 1;
    }
    ix
}

fn ceil_char_boundary(text: &str, mut ix: usize) -> usize {
    while !text.is_char_boundary(ix) {
        ix += 1;
    }
    ix
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
