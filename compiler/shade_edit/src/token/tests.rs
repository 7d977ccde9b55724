use super::*;

#[test]
fn new_array_is_empty() {
    let array = TokenArray::new();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
    assert_eq!(array.text(), "");
}

#[test]
fn slots_grow_in_chunks() {
    let mut array = TokenArray::new();
    array.push_slot().text.push('a');
    assert_eq!(array.len(), 1);
    assert_eq!(array.capacity(), GROW_CHUNK);

    for _ in 1..=GROW_CHUNK {
        array.push_slot();
    }
    assert_eq!(array.capacity(), 2 * GROW_CHUNK);
}

#[test]
fn slot_indices_are_sequential() {
    let mut array = TokenArray::new();
    for _ in 0..5 {
        array.push_slot();
    }
    let indices: Vec<u32> = array.iter().map(|t| t.index).collect();
    assert_eq!(indices, [0, 1, 2, 3, 4]);
}

#[test]
fn clear_keeps_slots_and_resets_on_reuse() {
    let mut array = TokenArray::new();
    {
        let slot = array.push_slot();
        slot.text.push_str("vec4");
        slot.link = Some(3);
        slot.flags = TokenFlags::ERROR | TokenFlags::HIGHLIGHT;
    }
    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), GROW_CHUNK);

    let slot = array.push_slot();
    assert_eq!(slot.index, 0);
    assert!(slot.text.is_empty());
    assert_eq!(slot.link, None);
    assert!(!slot.is_error());
    assert!(!slot.is_highlighted());
}

#[test]
fn text_concatenates_tokens() {
    let mut array = TokenArray::new();
    for text in ["int", " ", "a", ";"] {
        array.push_slot().text.push_str(text);
    }
    assert_eq!(array.text(), "int a;");
    assert_eq!(array[2].text, "a");
    assert!(array.get(4).is_none());
}

#[test]
fn end_line_counts_line_feeds() {
    let mut array = TokenArray::new();
    let slot = array.push_slot();
    slot.text.push_str("/* a\nb\n*/");
    slot.line = 3;
    assert_eq!(slot.end_line(), 5);
}

#[test]
fn line_break_is_whitespace_with_newline() {
    let mut array = TokenArray::new();
    let slot = array.push_slot();
    slot.category = Category::Whitespace;
    slot.text.push_str("  \n");
    assert!(slot.is_line_break());
    slot.category = Category::Comment;
    assert!(!slot.is_line_break());
}
