use super::*;

fn table() -> SymbolTable {
    let mut table = SymbolTable::with_max_len(3);
    for (symbol, class) in [
        ("<", SymbolClass::Compare),
        ("<<", SymbolClass::Bitwise),
        ("<=", SymbolClass::Compare),
        ("<<=", SymbolClass::Assign),
        ("/", SymbolClass::Arithmetic),
        ("/*", SymbolClass::CommentMarker),
    ] {
        table.insert(symbol, class).unwrap();
    }
    table
}

#[test]
fn longest_match_prefers_widest() {
    let table = table();
    assert_eq!(table.longest_match("<<= 1"), Some((3, SymbolClass::Assign)));
    assert_eq!(table.longest_match("<<1"), Some((2, SymbolClass::Bitwise)));
    assert_eq!(table.longest_match("<a"), Some((1, SymbolClass::Compare)));
    assert_eq!(table.longest_match("/* x"), Some((2, SymbolClass::CommentMarker)));
}

#[test]
fn longest_match_at_end_of_input() {
    let table = table();
    assert_eq!(table.longest_match("<"), Some((1, SymbolClass::Compare)));
    assert_eq!(table.longest_match(""), None);
}

#[test]
fn longest_match_misses_unknown() {
    assert_eq!(table().longest_match("@x"), None);
}

#[test]
fn longest_match_skips_split_characters() {
    // "<\u{e9}" has a 2-byte character after '<'; widths 2 and 3 split it.
    assert_eq!(table().longest_match("<\u{e9}"), Some((1, SymbolClass::Compare)));
}

#[test]
fn insert_rejects_empty_and_wide_symbols() {
    let mut table = SymbolTable::with_max_len(2);
    assert_eq!(table.insert("", SymbolClass::Dot), Err(SymbolTableError::Empty));
    assert_eq!(
        table.insert("...", SymbolClass::Dot),
        Err(SymbolTableError::TooLong {
            symbol: "...".to_owned(),
            max_len: 2
        })
    );
    assert!(table.is_empty());
}

#[test]
fn reinsert_replaces_class() {
    let mut table = table();
    let before = table.len();
    table.insert("<", SymbolClass::Open).unwrap();
    assert_eq!(table.len(), before);
    assert_eq!(table.get("<"), Some(SymbolClass::Open));
}

#[test]
fn collected_table_sizes_itself() {
    let table: SymbolTable = [
        ("", SymbolClass::Dot),
        (">>", SymbolClass::Bitwise),
        (";", SymbolClass::Terminator),
    ]
    .into_iter()
    .collect();
    assert_eq!(table.max_len(), 2);
    assert_eq!(table.len(), 2);
    assert_eq!(table.longest_match(">>x"), Some((2, SymbolClass::Bitwise)));
}
