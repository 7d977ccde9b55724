//! Owned, line-ending-normalized source for one scan.
//!
//! Editor surfaces hand over text with whatever line endings the platform
//! produced. Scanning works on a normalized copy in which every `\r\n` is a
//! single `\n`, so token offsets, line numbers and caret offsets all agree.
//!
//! Next to the text the buffer keeps a byte copy padded with zeros up to a
//! multiple of 64 bytes. There is always at least one zero after the
//! content, and the [`Cursor`] relies on it to read the byte under the
//! cursor without checking the length first.

use std::borrow::Cow;

use crate::Cursor;

/// Padding granularity of the scan copy.
const CACHE_LINE: usize = 64;

/// Normalized source text plus its zero-padded scan copy.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: String,
    padded: Vec<u8>,
}

impl SourceBuffer {
    /// Normalize `source` and build the padded copy.
    ///
    /// Offsets are `u32`; content past `u32::MAX` bytes is never scanned.
    pub fn new(source: &str) -> Self {
        let text = normalize_line_endings(source).into_owned();
        let mut padded = text.as_bytes().to_vec();
        padded.resize((text.len() / CACHE_LINE + 1) * CACHE_LINE, 0);
        Self { text, padded }
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Scan copy including the trailing zeros.
    pub fn padded_bytes(&self) -> &[u8] {
        &self.padded
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text, &self.padded)
    }

    /// Content length in bytes, saturating at `u32::MAX`.
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Replace every `\r\n` with `\n`.
///
/// Borrows the input when it has no CRLF. A `\r` not followed by `\n` stays.
pub fn normalize_line_endings(source: &str) -> Cow<'_, str> {
    match memchr::memmem::find(source.as_bytes(), b"\r\n") {
        Some(_) => Cow::Owned(source.replace("\r\n", "\n")),
        None => Cow::Borrowed(source),
    }
}
