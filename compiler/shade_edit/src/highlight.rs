//! Link-chain highlighting and caret status positions.

use crate::caret::CaretPosition;
use crate::token::{ClassifiedToken, TokenFlags};

/// Highlight the link chain through `index`.
///
/// Clears every highlight first. A token without a link highlights nothing;
/// otherwise the token and everything reachable by following links is
/// marked, stopping when the walk comes back to a marked token. Returns the
/// number of highlighted tokens.
pub fn highlight_chain(tokens: &mut [ClassifiedToken], index: usize) -> usize {
    for token in tokens.iter_mut() {
        token.flags.remove(TokenFlags::HIGHLIGHT);
    }
    let Some(start) = tokens.get(index) else {
        return 0;
    };
    if start.link.is_none() {
        return 0;
    }

    let mut count = 0;
    let mut next = Some(index);
    while let Some(ix) = next {
        let Some(token) = tokens.get_mut(ix) else {
            break;
        };
        if token.is_highlighted() {
            break;
        }
        token.flags |= TokenFlags::HIGHLIGHT;
        count += 1;
        next = token.link.map(|link| link as usize);
    }
    count
}

/// Move a caret sitting at the very end of a token onto offset 0 of the
/// following token. The last token keeps its end position.
pub fn normalize_caret(tokens: &[ClassifiedToken], caret: CaretPosition) -> CaretPosition {
    let index = caret.index as usize;
    match tokens.get(index) {
        Some(token) if caret.offset as usize >= token.len() && index + 1 < tokens.len() => {
            CaretPosition {
                index: caret.index + 1,
                offset: 0,
            }
        }
        _ => caret,
    }
}

/// One-based `(line, column)` of a caret, for a status bar.
pub fn caret_location(tokens: &[ClassifiedToken], caret: CaretPosition) -> Option<(u32, u32)> {
    let token = tokens.get(caret.index as usize)?;
    let offset = (caret.offset as usize).min(token.len());
    let before = token.text.as_bytes().get(..offset)?;
    let location = match memchr::memrchr(b'\n', before) {
        Some(last_lf) => {
            let lines = memchr::memchr_iter(b'\n', before).count();
            (
                token.line + count(lines) + 1,
                count(offset - last_lf - 1) + 1,
            )
        }
        None => (token.line + 1, token.col + count(offset) + 1),
    };
    Some(location)
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
