//! Character-class scanning primitives.
//!
//! A [`Cursor`] walks a [`SourceBuffer`](crate::SourceBuffer) one run at a
//! time. Each `collect_*` method consumes a maximal run of one character
//! class and hands back its text. Reading the byte under the cursor never
//! needs a length check: past the content the buffer holds `0x00`, which
//! belongs to no class the loops continue on.
//!
//! The cursor also keeps the line bookkeeping the lexer needs: how many
//! line feeds it has consumed, and where the current line begins.

/// Bytes of a bare word: `[A-Za-z0-9_#]`.
#[inline]
fn is_word_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'#')
}

#[inline]
fn is_number_body(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.'
}

/// Width of the UTF-8 sequence led by `lead`. Continuation and invalid
/// bytes count as one so the cursor always makes progress.
#[inline]
fn utf8_width(lead: u8) -> u32 {
    match lead {
        0xF0..=0xF7 => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "runs are slices of a source whose length fits in u32"
)]
#[inline]
fn width(n: usize) -> u32 {
    n as u32
}

/// Scan position in one source buffer.
///
/// `Copy`, so the lexer can save a cursor and restore it to back out of a
/// speculative scan.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// `text` followed by at least one `0x00`.
    padded: &'a [u8],
    pos: u32,
    end: u32,
    line_count: u32,
    line_start: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, padded: &'a [u8]) -> Self {
        let end = u32::try_from(text.len()).unwrap_or(u32::MAX);
        debug_assert!(padded.len() > text.len(), "buffer lacks a sentinel");
        Self {
            text,
            padded,
            pos: 0,
            end,
            line_count: 0,
            line_start: 0,
        }
    }

    /// Byte under the cursor, `0x00` once the content is exhausted.
    #[inline]
    pub fn byte(&self) -> u8 {
        self.padded[self.pos as usize]
    }

    /// All content consumed. A `0x00` inside the content is not the end.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Line feeds consumed so far.
    #[inline]
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// Offset of the first byte after the last consumed line feed.
    #[inline]
    pub fn line_start(&self) -> u32 {
        self.line_start
    }

    /// Text from `start` up to the cursor.
    pub fn text_from(&self, start: u32) -> &'a str {
        &self.text[start as usize..self.pos as usize]
    }

    /// Content not yet consumed.
    pub fn rest(&self) -> &'a str {
        self.text.get(self.pos as usize..).unwrap_or_default()
    }

    /// Move over `n` bytes that contain no line feed.
    #[inline]
    pub fn bump(&mut self, n: u32) {
        self.pos = (self.pos + n).min(self.end);
    }

    /// Move over one whole UTF-8 character.
    #[inline]
    pub fn bump_char(&mut self) {
        self.bump(utf8_width(self.byte()));
    }

    /// Move over the next `len` bytes, which may span lines.
    fn consume(&mut self, len: usize) {
        let start = self.pos as usize;
        let run = &self.padded[start..start + len];
        let mut lines = memchr::memchr_iter(b'\n', run);
        if let Some(last) = lines.next_back() {
            self.line_count += width(lines.count()) + 1;
            self.line_start = width(start + last + 1);
        }
        self.pos += width(len);
    }

    fn unconsumed(&self) -> &'a [u8] {
        &self.padded[self.pos as usize..self.end as usize]
    }

    /// Consume `b` if it is the byte under the cursor.
    pub fn skip_byte(&mut self, b: u8) -> bool {
        let hit = !self.at_end() && self.byte() == b;
        if hit {
            self.pos += 1;
        }
        hit
    }

    /// Consume everything before the next `stop` byte, or to the end.
    pub fn collect_until(&mut self, stop: u8) -> &'a str {
        let start = self.pos;
        let rest = self.unconsumed();
        self.consume(memchr::memchr(stop, rest).unwrap_or(rest.len()));
        self.text_from(start)
    }

    /// Consume bytes `<= 0x20`.
    ///
    /// With `per_line` the run ends just after its first line feed, which
    /// puts the indentation of every line into a token of its own.
    pub fn collect_whitespace(&mut self, per_line: bool) -> &'a str {
        let start = self.pos;
        while !self.at_end() && self.byte() <= b' ' {
            let b = self.byte();
            self.pos += 1;
            if b == b'\n' {
                self.line_count += 1;
                self.line_start = self.pos;
                if per_line {
                    break;
                }
            }
        }
        self.text_from(start)
    }

    /// Consume a bare word. Empty when the cursor is not on a word byte.
    #[inline]
    pub fn collect_word(&mut self) -> &'a str {
        let start = self.pos;
        while is_word_byte(self.byte()) {
            self.pos += 1;
        }
        self.text_from(start)
    }

    /// Consume a numeric literal without judging it.
    ///
    /// Shape: optional sign, then digits and dots, then (only if that body
    /// was non-empty) `e`/`E`, an optional sign and digits. So `1.2.3` and
    /// `1e` are single literals and a lone `-` is just the sign.
    pub fn collect_number(&mut self) -> &'a str {
        let start = self.pos;
        if matches!(self.byte(), b'+' | b'-') {
            self.pos += 1;
        }
        let body = self.pos;
        while is_number_body(self.byte()) {
            self.pos += 1;
        }
        if self.pos > body && matches!(self.byte(), b'e' | b'E') {
            self.pos += 1;
            if matches!(self.byte(), b'+' | b'-') {
                self.pos += 1;
            }
            while self.byte().is_ascii_digit() {
                self.pos += 1;
            }
        }
        self.text_from(start)
    }

    /// Move to the next line feed, leaving it unconsumed, or to the end.
    pub fn eat_until_newline_or_eof(&mut self) {
        let rest = self.unconsumed();
        let len = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        self.pos += width(len);
    }

    /// Consume through the next `pattern`, or to the end when it never
    /// occurs. Returns whether it was found.
    pub fn eat_through(&mut self, pattern: &[u8]) -> bool {
        let rest = self.unconsumed();
        let found = memchr::memmem::find(rest, pattern);
        self.consume(found.map_or(rest.len(), |at| at + pattern.len()));
        found.is_some()
    }
}
