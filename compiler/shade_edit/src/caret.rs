//! Map a byte offset in the document to a position inside a token.

/// Caret position as token index plus byte offset into that token's text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaretPosition {
    pub index: u32,
    pub offset: u32,
}

/// Locate byte offset `target` in `tokens`.
///
/// The owner is the first token whose end lies past `target`, so a caret on
/// a token boundary belongs to the token that follows it. Offsets past the
/// end map to the end of the last token. `None` only for an empty document.
pub fn locate_caret<T: AsRef<str>>(tokens: &[T], target: usize) -> Option<CaretPosition> {
    let mut start = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        let end = start + token.as_ref().len();
        if end > target {
            return Some(position(index, target - start));
        }
        start = end;
    }
    let last = tokens.len().checked_sub(1)?;
    Some(position(last, tokens[last].as_ref().len()))
}

/// Byte offset of `caret` in the concatenated text.
pub fn caret_offset<T: AsRef<str>>(tokens: &[T], caret: CaretPosition) -> usize {
    let index = caret.index as usize;
    let before: usize = tokens
        .iter()
        .take(index)
        .map(|token| token.as_ref().len())
        .sum();
    before + caret.offset as usize
}

fn position(index: usize, offset: usize) -> CaretPosition {
    CaretPosition {
        index: u32::try_from(index).unwrap_or(u32::MAX),
        offset: u32::try_from(offset).unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
