//! Classified tokens and their reusable storage.

use std::ops::Index;

use bitflags::bitflags;
use shade_lang::Category;
use shade_lexer_core::SymbolClass;

bitflags! {
    /// Per-token display state.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Unmatched closer, or named in a compiler diagnostic.
        const ERROR = 1 << 0;
        /// Part of the link chain under the caret.
        const HIGHLIGHT = 1 << 1;
    }
}

/// One token of a generation, with everything the host needs to draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub text: String,
    pub category: Category,
    pub symbol: Option<SymbolClass>,
    /// Zero-based line of the first byte.
    pub line: u32,
    /// Zero-based byte column of the first byte.
    pub col: u32,
    /// Position in the generation. Fixed per storage slot.
    pub index: u32,
    /// Matching bracket, terminated frame, or next occurrence of the same
    /// identifier.
    pub link: Option<u32>,
    pub flags: TokenFlags,
}

impl ClassifiedToken {
    fn empty(index: u32) -> Self {
        Self {
            text: String::new(),
            category: Category::Unknown,
            symbol: None,
            line: 0,
            col: 0,
            index,
            link: None,
            flags: TokenFlags::empty(),
        }
    }

    /// Reset everything except `index` and the text allocation.
    fn reset(&mut self) {
        self.text.clear();
        self.category = Category::Unknown;
        self.symbol = None;
        self.line = 0;
        self.col = 0;
        self.link = None;
        self.flags = TokenFlags::empty();
    }

    /// Text length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.flags.contains(TokenFlags::ERROR)
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(TokenFlags::HIGHLIGHT)
    }

    /// Whitespace containing a line feed.
    pub fn is_line_break(&self) -> bool {
        self.category == Category::Whitespace && self.text.contains('\n')
    }

    /// Zero-based line of the last byte.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "documents are limited to u32 offsets"
    )]
    pub fn end_line(&self) -> u32 {
        self.line + memchr::memchr_iter(b'\n', self.text.as_bytes()).count() as u32
    }
}

impl AsRef<str> for ClassifiedToken {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Slots grow in chunks of this many tokens.
pub const GROW_CHUNK: usize = 1024;

/// Token storage for one generation.
///
/// Slots are reused between parses: clearing keeps every slot and its text
/// allocation, and the array only ever grows, in chunks of [`GROW_CHUNK`].
/// A slot's `index` is assigned when it is created and never changes.
#[derive(Clone, Debug, Default)]
pub struct TokenArray {
    slots: Vec<ClassifiedToken>,
    len: usize,
}

impl TokenArray {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated slots, live or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ClassifiedToken] {
        &self.slots[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [ClassifiedToken] {
        &mut self.slots[..self.len]
    }

    pub fn get(&self, index: usize) -> Option<&ClassifiedToken> {
        self.as_slice().get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedToken> {
        self.as_slice().iter()
    }

    /// Concatenated token text.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.iter().map(ClassifiedToken::len).sum());
        for token in self.iter() {
            out.push_str(&token.text);
        }
        out
    }

    /// Forget all tokens, keeping the slots.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Claim the next slot, reset and ready to fill.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token counts are limited to u32 indices"
    )]
    pub fn push_slot(&mut self) -> &mut ClassifiedToken {
        if self.len == self.slots.len() {
            let start = self.slots.len();
            self.slots.reserve(GROW_CHUNK);
            self.slots
                .extend((start..start + GROW_CHUNK).map(|ix| ClassifiedToken::empty(ix as u32)));
        }
        let slot = &mut self.slots[self.len];
        self.len += 1;
        slot.reset();
        slot
    }
}

impl Index<usize> for TokenArray {
    type Output = ClassifiedToken;

    fn index(&self, index: usize) -> &ClassifiedToken {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a TokenArray {
    type Item = &'a ClassifiedToken;
    type IntoIter = std::slice::Iter<'a, ClassifiedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
