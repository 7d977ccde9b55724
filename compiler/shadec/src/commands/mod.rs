//! Command handlers for the `shade` CLI.
//!
//! Each submodule implements one command and its option parsing. Option
//! parsers return `Err(message)` so `main` can print usage and exit.

use std::sync::Arc;
use std::{fs, io};

use shade_lang::LanguageTable;

mod edit;
mod fmt;
mod lex;

pub use edit::{parse_edit_options, run_edit, EditOptions};
pub use fmt::{parse_fmt_options, run_format, FmtOptions};
pub use lex::{lex_file, render_raw_tokens, render_tokens};

/// The built-in GLSL table, shared by every command.
pub(crate) fn glsl() -> Arc<LanguageTable> {
    Arc::new(LanguageTable::glsl())
}

/// Read a source file. The error is a one-line message naming `path`.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| describe_read_error(path, &e))
}

fn describe_read_error(path: &str, e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => format!("{path}: no such file"),
        io::ErrorKind::PermissionDenied => format!("{path}: permission denied"),
        io::ErrorKind::InvalidData => format!("{path}: not valid UTF-8"),
        _ => format!("{path}: {e}"),
    }
}

/// Value of a `--name=value` flag.
fn flag_value<'a>(arg: &'a str, name: &str) -> Option<&'a str> {
    arg.strip_prefix("--")?.strip_prefix(name)?.strip_prefix('=')
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value for --{flag}: '{value}'"))
}
