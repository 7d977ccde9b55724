//! Editor configuration.

use thiserror::Error;

/// Widest indentation step accepted by [`EditorConfig::validate`].
pub const MAX_INDENT_UNIT: u32 = 16;

/// Tunables of an [`EditSession`](crate::EditSession).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Spaces per indentation level.
    pub indent_unit: u32,
    /// End whitespace tokens after their first line feed, so every line's
    /// indentation is its own token.
    pub whitespace_per_line: bool,
    /// Tokens of context added on each side of a diff range.
    pub diff_margin: usize,
    /// Extend a diff range to the end of the document when the common
    /// suffix is shorter than this many tokens. `0` disables it.
    pub tail_refresh: usize,
    /// Parses slower than this are logged at `warn`.
    pub slow_parse_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent_unit: 2,
            whitespace_per_line: true,
            diff_margin: 2,
            tail_refresh: 0,
            slow_parse_ms: 10,
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.indent_unit {
            0 => Err(ConfigError::ZeroIndent),
            unit if unit > MAX_INDENT_UNIT => Err(ConfigError::IndentTooWide(unit)),
            _ => Ok(()),
        }
    }
}

/// Invalid [`EditorConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("indent unit must be at least 1")]
    ZeroIndent,

    #[error("indent unit {0} exceeds the maximum of {max}", max = MAX_INDENT_UNIT)]
    IndentTooWide(u32),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
