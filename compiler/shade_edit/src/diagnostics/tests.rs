use pretty_assertions::assert_eq;

use super::*;

#[test]
fn mentions_requires_quotes() {
    let mut errors = LineErrors::new();
    errors.insert(3, 0, "'color' : undeclared identifier");
    assert!(errors.mentions(3, "color"));
    assert!(!errors.mentions(3, "undeclared"));
    assert!(!errors.mentions(3, "col"));
    assert!(!errors.mentions(2, "color"));
    assert!(!errors.mentions(3, ""));
}

#[test]
fn mentions_finds_later_quoted_occurrence() {
    let mut errors = LineErrors::new();
    errors.insert(1, 0, "x used before 'x' declared");
    assert!(errors.mentions(1, "x"));
}

#[test]
fn insert_replaces_line() {
    let mut errors = LineErrors::new();
    errors.insert(2, 1, "first");
    errors.insert(2, 5, "second");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(2),
        Some(&LineError {
            col: 5,
            message: "second".to_owned()
        })
    );
}

#[test]
fn error_lines_are_sorted() {
    let mut errors = LineErrors::new();
    errors.insert(9, 0, "a");
    errors.insert(2, 0, "b");
    errors.insert(5, 0, "c");
    assert_eq!(errors.error_lines(), [2, 5, 9]);
}

#[test]
fn shader_log_is_parsed_and_shifted() {
    let header = "#version 300 es\nprecision highp float;\n";
    let user = "void main() {\n  foo = 1.0;\n}\n";
    let full = format!("{header}{user}");
    let log = "ERROR: 0:4: 'foo' : undeclared identifier\n\
               ERROR: 0:4: '=' : cannot convert\n\
               ERROR: 0:5: '' : compilation terminated\n\
               2 compilation errors.  No code generated.";

    let parsed = LineErrors::from_shader_log(log, &full, user);
    assert_eq!(
        parsed.first_message.as_deref(),
        Some("'foo' : undeclared identifier")
    );
    assert_eq!(parsed.errors.error_lines(), [2, 3]);
    // Later entries for a line replace earlier ones.
    assert_eq!(
        parsed.errors.get(2).map(|e| e.message.as_str()),
        Some("'=' : cannot convert")
    );
}

#[test]
fn shader_log_drops_header_lines() {
    let full = "#version 300 es\nvoid main(){}";
    let parsed = LineErrors::from_shader_log(
        "ERROR: 0:1: '#version' : bad",
        full,
        "void main(){}",
    );
    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.first_message.as_deref(), Some("'#version' : bad"));
}

#[test]
fn shader_log_without_errors() {
    let parsed = LineErrors::from_shader_log("WARNING: 0:1: meh\n", "x", "x");
    assert_eq!(parsed, ParsedShaderLog::default());
}

#[test]
fn user_source_not_found_means_no_shift() {
    let parsed = LineErrors::from_shader_log("ERROR: 0:2: 'y' : oops", "a\nb", "zzz");
    assert_eq!(parsed.errors.error_lines(), [2]);
}
