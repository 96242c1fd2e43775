use crate::util::unicode;

/// Insert a character at the cursor's byte offset, advancing the cursor
pub(super) fn insert_char(buffer: &mut String, cursor: &mut usize, c: char) {
    let at = (*cursor).min(buffer.len());
    buffer.insert(at, c);
    *cursor = at + c.len_utf8();
}

/// Delete the grapheme before the cursor
pub(super) fn backspace(buffer: &mut String, cursor: &mut usize) {
    let at = (*cursor).min(buffer.len());
    if let Some(prev) = unicode::prev_grapheme_boundary(buffer, at) {
        buffer.replace_range(prev..at, "");
        *cursor = prev;
    }
}

/// Move the cursor one grapheme left
pub(super) fn cursor_left(buffer: &str, cursor: &mut usize) {
    if let Some(prev) = unicode::prev_grapheme_boundary(buffer, (*cursor).min(buffer.len())) {
        *cursor = prev;
    }
}

/// Move the cursor one grapheme right
pub(super) fn cursor_right(buffer: &str, cursor: &mut usize) {
    if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
        *cursor = next;
    }
}
