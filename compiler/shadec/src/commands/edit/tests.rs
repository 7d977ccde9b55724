use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn options(at: usize, edit: Edit) -> EditOptions {
    EditOptions {
        at,
        edit,
        print: false,
    }
}

#[test]
fn parses_edit_flags() {
    let (path, parsed) =
        parse_edit_options(&args(&["s.glsl", "--at=5", "--insert=x\\n", "--delete=2", "--print"]))
            .unwrap();
    assert_eq!(path, "s.glsl");
    assert_eq!(
        parsed,
        EditOptions {
            at: 5,
            edit: Edit::replace(2, "x\n"),
            print: true,
        }
    );
}

#[test]
fn caret_is_required() {
    assert_eq!(
        parse_edit_options(&args(&["s.glsl", "--insert=x"])).unwrap_err(),
        "missing --at=N"
    );
    assert_eq!(
        parse_edit_options(&args(&["--at=1"])).unwrap_err(),
        "missing file path"
    );
    assert_eq!(
        parse_edit_options(&args(&["s.glsl", "--at=-1"])).unwrap_err(),
        "invalid value for --at: '-1'"
    );
}

#[test]
fn unescapes_insert_text() {
    assert_eq!(unescape("a\\tb\\nc"), "a\tb\nc");
    assert_eq!(unescape("\\\\n"), "\\n");
    assert_eq!(unescape("\\x"), "\\x");
    assert_eq!(unescape("end\\"), "end\\");
}

#[test]
fn appending_a_digit_reports_local_diff() {
    let (session, outcome) = apply_edit("x = 1;", &options(5, Edit::insert("2"))).unwrap();
    assert_eq!(session.text(), "x = 12;");
    assert_eq!(
        render_outcome(&session, &outcome),
        "diff: new 2..6 replaces current 2..6\n\
         caret: token 5 offset 0 (byte 6), line 1 col 7\n\
         lines: 1\n"
    );
}

#[test]
fn new_line_is_indented() {
    let (session, outcome) =
        apply_edit("void main() {\n}", &options(14, Edit::insert("x;\n"))).unwrap();
    assert_eq!(session.text(), "void main() {\n  x;\n}");
    assert_eq!(outcome.caret_offset, 19);
    let report = render_outcome(&session, &outcome);
    assert!(report.ends_with("line 3 col 1\nlines: 3\n"), "{report}");
}
