use super::*;

#[test]
fn default_is_valid() {
    let config = EditorConfig::default();
    assert_eq!(config.indent_unit, 2);
    assert_eq!(config.diff_margin, 2);
    assert_eq!(config.tail_refresh, 0);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn zero_indent_is_rejected() {
    let config = EditorConfig {
        indent_unit: 0,
        ..EditorConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroIndent));
}

#[test]
fn wide_indent_is_rejected() {
    let config = EditorConfig {
        indent_unit: 17,
        ..EditorConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err, ConfigError::IndentTooWide(17));
    assert_eq!(err.to_string(), "indent unit 17 exceeds the maximum of 16");
}
