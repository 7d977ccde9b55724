//! `shade edit`: replay one edit through an edit session.

use std::fmt::Write as _;

use shade_edit::{ConfigError, Edit, EditSession, EditorConfig, ParseOutcome, TokenDiff};

use super::{flag_value, glsl, parse_number, read_file};

/// Options of the `edit` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOptions {
    /// Byte offset of the caret in the formatted document.
    pub at: usize,
    pub edit: Edit,
    /// Print the document after the edit.
    pub print: bool,
}

/// Parse `<file> --at=N [--insert=TEXT] [--delete=N] [--print]`.
///
/// `\n` and `\t` in the inserted text are unescaped so line breaks can be
/// typed on a shell command line.
pub fn parse_edit_options(args: &[String]) -> Result<(String, EditOptions), String> {
    let mut path = None;
    let mut at = None;
    let mut edit = Edit::default();
    let mut print = false;
    for arg in args {
        if let Some(value) = flag_value(arg, "at") {
            at = Some(parse_number("at", value)?);
        } else if let Some(value) = flag_value(arg, "insert") {
            edit.insert = unescape(value);
        } else if let Some(value) = flag_value(arg, "delete") {
            edit.delete_len = parse_number("delete", value)?;
        } else if arg == "--print" {
            print = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    let path = path.ok_or_else(|| "missing file path".to_owned())?;
    let at = at.ok_or_else(|| "missing --at=N".to_owned())?;
    Ok((path, EditOptions { at, edit, print }))
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Load `content`, apply the edit, and return the session with the outcome.
pub(crate) fn apply_edit(
    content: &str,
    options: &EditOptions,
) -> Result<(EditSession, ParseOutcome), ConfigError> {
    let mut session = EditSession::new(glsl(), EditorConfig::default())?;
    session.load(content);
    let text = session.text();
    let outcome = session.parse(&text, options.at, Some(&options.edit));
    Ok((session, outcome))
}

/// Human-readable report of one parse.
pub(crate) fn render_outcome(session: &EditSession, outcome: &ParseOutcome) -> String {
    let mut out = String::new();
    let _ = match &outcome.diff {
        TokenDiff::Unchanged => writeln!(out, "diff: unchanged"),
        TokenDiff::AllChanged => writeln!(out, "diff: all changed"),
        TokenDiff::Changed { new, current } => writeln!(
            out,
            "diff: new {}..{} replaces current {}..{}",
            new.start, new.end, current.start, current.end
        ),
    };
    match outcome.caret {
        Some(caret) => {
            let _ = write!(
                out,
                "caret: token {} offset {} (byte {})",
                caret.index, caret.offset, outcome.caret_offset
            );
            if let Some((line, col)) = session.caret_location(outcome.caret_offset) {
                let _ = write!(out, ", line {line} col {col}");
            }
            out.push('\n');
        }
        None => out.push_str("caret: none\n"),
    }
    let _ = writeln!(out, "lines: {}", outcome.line_count + 1);
    out
}

/// Run the `edit` command. Returns `false` on failure.
pub fn run_edit(path: &str, options: &EditOptions) -> bool {
    let content = match read_file(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {e}");
            return false;
        }
    };
    tracing::debug!(path, at = options.at, delete = options.edit.delete_len, "edit");
    let (session, outcome) = match apply_edit(&content, options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return false;
        }
    };
    print!("{}", render_outcome(&session, &outcome));
    if options.print {
        println!();
        print!("{}", session.text());
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
