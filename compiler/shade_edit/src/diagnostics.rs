//! Compiler diagnostics attached to source lines.
//!
//! Hosts compile the shader elsewhere and report errors back per line. On
//! the next lex, a token on a reported line is flagged when the message
//! quotes its text (`'text'`), which is how GLSL compilers name the
//! offending identifier.

use rustc_hash::FxHashMap;

/// One diagnostic on a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineError {
    /// Column reported by the compiler. Informational only.
    pub col: u32,
    pub message: String,
}

/// Diagnostics keyed by one-based line number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineErrors {
    lines: FxHashMap<u32, LineError>,
}

impl LineErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, replacing any earlier one on the same line.
    pub fn insert(&mut self, line: u32, col: u32, message: impl Into<String>) {
        self.lines.insert(
            line,
            LineError {
                col,
                message: message.into(),
            },
        );
    }

    pub fn get(&self, line: u32) -> Option<&LineError> {
        self.lines.get(&line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines carrying a diagnostic, ascending.
    pub fn error_lines(&self) -> Vec<u32> {
        let mut lines: Vec<u32> = self.lines.keys().copied().collect();
        lines.sort_unstable();
        lines
    }

    /// Whether the diagnostic on `line` quotes `text`.
    pub fn mentions(&self, line: u32, text: &str) -> bool {
        let Some(error) = self.lines.get(&line) else {
            return false;
        };
        if text.is_empty() {
            return false;
        }
        error.message.match_indices(text).any(|(at, _)| {
            let bytes = error.message.as_bytes();
            at > 0 && bytes[at - 1] == b'\'' && bytes.get(at + text.len()) == Some(&b'\'')
        })
    }

    /// Parse a GL shader info log.
    ///
    /// Lines of the form `ERROR: <col>:<line>: <message>` are collected.
    /// Hosts usually prepend a header (`#version 300 es`, uniforms) to the
    /// user's source before compiling; line numbers are shifted back by the
    /// number of lines preceding `user_source` inside `full_source`.
    /// Entries that land before the user's first line are dropped.
    pub fn from_shader_log(log: &str, full_source: &str, user_source: &str) -> ParsedShaderLog {
        let header_lines = full_source.find(user_source).map_or(0, |at| {
            memchr::memchr_iter(b'\n', &full_source.as_bytes()[..at]).count()
        });

        let mut errors = LineErrors::new();
        let mut first_message = None;
        for entry in log.lines().filter_map(parse_log_line) {
            if first_message.is_none() {
                first_message = Some(entry.message.to_owned());
            }
            let line = usize::try_from(entry.line)
                .ok()
                .and_then(|line| line.checked_sub(header_lines))
                .and_then(|line| u32::try_from(line).ok());
            match line {
                Some(line) if line > 0 => errors.insert(line, entry.col, entry.message),
                _ => tracing::debug!(line = entry.line, "diagnostic outside user source"),
            }
        }
        ParsedShaderLog {
            errors,
            first_message,
        }
    }
}

/// Result of [`LineErrors::from_shader_log`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedShaderLog {
    pub errors: LineErrors,
    /// Message of the first error, for a status line.
    pub first_message: Option<String>,
}

struct LogEntry<'a> {
    col: u32,
    line: u32,
    message: &'a str,
}

/// `ERROR: 0:12: 'x' : undeclared identifier`
fn parse_log_line(line: &str) -> Option<LogEntry<'_>> {
    let at = line.find("ERROR: ")?;
    let rest = &line[at + "ERROR: ".len()..];
    let (col, rest) = rest.split_once(':')?;
    let (line_no, message) = rest.split_once(':')?;
    let message = message.strip_prefix(' ')?;
    if message.is_empty() {
        return None;
    }
    Some(LogEntry {
        col: col.trim().parse().ok()?,
        line: line_no.trim().parse().ok()?,
        message,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
