use super::*;

const TOKENS: [&str; 4] = ["int", " ", "a", ";"];

fn at(index: u32, offset: u32) -> Option<CaretPosition> {
    Some(CaretPosition { index, offset })
}

#[test]
fn offset_inside_token() {
    assert_eq!(locate_caret(&TOKENS, 1), at(0, 1));
    assert_eq!(locate_caret(&TOKENS, 0), at(0, 0));
}

#[test]
fn boundary_belongs_to_next_token() {
    assert_eq!(locate_caret(&TOKENS, 3), at(1, 0));
    assert_eq!(locate_caret(&TOKENS, 4), at(2, 0));
}

#[test]
fn end_of_document() {
    assert_eq!(locate_caret(&TOKENS, 6), at(3, 1));
    assert_eq!(locate_caret(&TOKENS, 100), at(3, 1));
}

#[test]
fn empty_document_has_no_caret() {
    let empty: [&str; 0] = [];
    assert_eq!(locate_caret(&empty, 0), None);
}

#[test]
fn empty_tokens_are_skipped() {
    let tokens = ["a", "", "b"];
    assert_eq!(locate_caret(&tokens, 1), at(2, 0));
}

#[test]
fn offset_round_trips() {
    for target in 0..=6 {
        let caret = locate_caret(&TOKENS, target).unwrap();
        assert_eq!(caret_offset(&TOKENS, caret), target);
    }
}
