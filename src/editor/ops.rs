//! Pure text transforms behind the toolbar and line shortcuts.
//!
//! Every function takes the full text plus UTF-16 offsets and returns a new
//! text. Out-of-range offsets are clamped and reversed selections are
//! swapped; none of these can panic on caller input.

use super::offset::{Selection, Utf16Map, utf16_len};

/// Wrap the selection in `before`/`after`, or insert `placeholder` when the
/// selection is empty.
///
/// Returns the new text and a collapsed cursor placed just past `after`.
pub fn insert_around(
    text: &str,
    start: usize,
    end: usize,
    before: &str,
    after: &str,
    placeholder: &str,
) -> (String, usize) {
    let map = Utf16Map::new(text);
    let sel = Selection::new(start, end).clamped(map.len());
    let (from, to) = (map.byte_of(sel.start), map.byte_of(sel.end));
    let selected = if from < to { &text[from..to] } else { placeholder };

    let mut out =
        String::with_capacity(text.len() + before.len() + selected.len() + after.len());
    out.push_str(&text[..from]);
    out.push_str(before);
    out.push_str(selected);
    out.push_str(after);
    out.push_str(&text[to..]);

    let cursor = map.offset_of(from) + utf16_len(before) + utf16_len(selected) + utf16_len(after);
    (out, cursor)
}

/// Insert a copy of the cursor's line directly below it.
pub fn duplicate_line(text: &str, cursor: usize) -> String {
    let at = Utf16Map::new(text).byte_of(cursor);
    let line_start = text[..at].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[at..].find('\n').map_or(text.len(), |i| at + i);
    let line = &text[line_start..line_end];

    let mut out = String::with_capacity(text.len() + line.len() + 1);
    out.push_str(&text[..line_end]);
    out.push('\n');
    out.push_str(line);
    out.push_str(&text[line_end..]);
    out
}

/// Swap the cursor's line with the one above. No-op on the first line.
pub fn move_line_up(text: &str, cursor: usize) -> String {
    let index = line_index(text, cursor);
    if index == 0 {
        return text.to_string();
    }
    swap_lines(text, index - 1)
}

/// Swap the cursor's line with the one below. No-op on the last line.
pub fn move_line_down(text: &str, cursor: usize) -> String {
    let index = line_index(text, cursor);
    if index + 1 >= text.split('\n').count() {
        return text.to_string();
    }
    swap_lines(text, index)
}

/// Zero-based index of the line holding `cursor`: the number of newlines
/// strictly before it.
pub fn line_index(text: &str, cursor: usize) -> usize {
    let at = Utf16Map::new(text).byte_of(cursor);
    text[..at].matches('\n').count()
}

/// Swap line `upper` with line `upper + 1`; the caller checks both exist.
fn swap_lines(text: &str, upper: usize) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.swap(upper, upper + 1);
    lines.join("\n")
}
