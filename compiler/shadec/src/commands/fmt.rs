//! `shade fmt`: re-indent a file.

use shade_edit::{format_source, ConfigError, EditorConfig};

use super::{flag_value, glsl, parse_number, read_file};

/// Options of the `fmt` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FmtOptions {
    /// Report whether the file is formatted instead of printing it.
    pub check: bool,
    /// Spaces per level, when not the default.
    pub indent_unit: Option<u32>,
}

impl FmtOptions {
    fn config(&self) -> EditorConfig {
        let mut config = EditorConfig::default();
        if let Some(unit) = self.indent_unit {
            config.indent_unit = unit;
        }
        config
    }
}

/// Parse `<file> [--check] [--indent=N]`.
pub fn parse_fmt_options(args: &[String]) -> Result<(String, FmtOptions), String> {
    let mut options = FmtOptions::default();
    let mut path = None;
    for arg in args {
        if arg == "--check" {
            options.check = true;
        } else if let Some(value) = flag_value(arg, "indent") {
            options.indent_unit = Some(parse_number("indent", value)?);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    let path = path.ok_or_else(|| "missing file path".to_owned())?;
    Ok((path, options))
}

/// Formatted `content`.
pub(crate) fn format_text(content: &str, options: &FmtOptions) -> Result<String, ConfigError> {
    format_source(content, glsl(), options.config())
}

/// Format `path` to stdout, or check it. Returns `false` when the command
/// failed or the check found a difference.
pub fn run_format(path: &str, options: &FmtOptions) -> bool {
    let content = match read_file(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {e}");
            return false;
        }
    };
    tracing::debug!(path, bytes = content.len(), check = options.check, "fmt");
    let formatted = match format_text(&content, options) {
        Ok(formatted) => formatted,
        Err(e) => {
            eprintln!("error: {e}");
            return false;
        }
    };

    if options.check {
        if formatted == content {
            return true;
        }
        eprintln!("{path}: would reformat");
        return false;
    }
    print!("{formatted}");
    true
}
