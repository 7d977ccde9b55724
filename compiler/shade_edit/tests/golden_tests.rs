#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Golden tests for the indentation pass.
//!
//! Every `.glsl` file in `tests/fmt/` is formatted and compared against the
//! `.glsl.expected` file next to it. The expected output must itself be a
//! fixed point: formatting it again changes nothing.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use shade_edit::{format_source, EditorConfig};
use shade_lang::LanguageTable;

fn format(source: &str) -> String {
    format_source(source, Arc::new(LanguageTable::glsl()), EditorConfig::default()).unwrap()
}

fn fixtures() -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fmt");
    let mut inputs: Vec<PathBuf> = fs::read_dir(&dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "glsl"))
                .collect()
        })
        .unwrap_or_default();
    inputs.sort();
    assert!(!inputs.is_empty(), "no fixtures under {}", dir.display());
    inputs
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))
}

fn check_fixture(input: &Path) -> Result<(), String> {
    let source = read(input)?;
    let expected = read(&input.with_extension("glsl.expected"))?;

    let formatted = format(&source);
    if formatted != expected {
        return Err(format!(
            "{} formats differently\n[expected]\n{expected}\n[actual]\n{formatted}",
            input.display()
        ));
    }
    let reformatted = format(&expected);
    if reformatted != expected {
        return Err(format!(
            "{} is not stable under a second pass\n[first]\n{expected}\n[second]\n{reformatted}",
            input.display()
        ));
    }
    Ok(())
}

#[test]
fn fmt_fixtures_match_expected_output() {
    let failures: Vec<String> = fixtures()
        .iter()
        .filter_map(|input| check_fixture(input).err())
        .collect();
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}
