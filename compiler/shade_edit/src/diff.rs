//! Token-level diff between two generations.
//!
//! Tokens are compared by text only. The changed region is whatever lies
//! between the longest common prefix and the longest common suffix, widened
//! by a few tokens of margin so the host redraws neighbours whose
//! highlighting may depend on the edit.

use std::ops::Range;

/// Result of comparing a new generation against the current one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenDiff {
    /// Same token texts in the same order.
    Unchanged,
    /// Only these ranges differ. Either range may be empty for a pure
    /// insertion or deletion.
    Changed {
        /// Half-open range in the new generation.
        new: Range<usize>,
        /// Half-open range in the current generation.
        current: Range<usize>,
    },
    /// Redraw everything.
    AllChanged,
}

/// Diff tuning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    /// Context tokens added on each side of the changed range.
    pub margin: usize,
    /// Extend to the end of both generations when the common suffix is
    /// shorter than this. `0` disables it.
    pub tail_refresh: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            margin: 2,
            tail_refresh: 0,
        }
    }
}

/// Compare `new` against `current`.
pub fn diff_tokens<T: AsRef<str>>(new: &[T], current: &[T], options: &DiffOptions) -> TokenDiff {
    if new.is_empty() || current.is_empty() {
        return TokenDiff::AllChanged;
    }

    let same = |a: &T, b: &T| a.as_ref() == b.as_ref();
    let min_len = new.len().min(current.len());

    let prefix = new
        .iter()
        .zip(current)
        .take_while(|(a, b)| same(a, b))
        .count();
    if prefix == new.len() && new.len() == current.len() {
        return TokenDiff::Unchanged;
    }

    // Bounded so the suffix never overlaps the prefix in either array.
    let suffix = new
        .iter()
        .rev()
        .zip(current.iter().rev())
        .take(min_len - prefix)
        .take_while(|(a, b)| same(a, b))
        .count();

    if prefix == 0 && suffix == 0 && new.len() != current.len() {
        return TokenDiff::AllChanged;
    }

    let (mut new_end, mut current_end) = (new.len() - suffix, current.len() - suffix);
    if options.tail_refresh > 0 && suffix < options.tail_refresh {
        new_end = new.len();
        current_end = current.len();
    }

    let start = prefix.saturating_sub(options.margin);
    TokenDiff::Changed {
        new: start..(new_end + options.margin).min(new.len()),
        current: start..(current_end + options.margin).min(current.len()),
    }
}
