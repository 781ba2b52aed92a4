//! Find-next and replace-all for the find bar.

use regex::Regex;

use super::offset::{Utf16Map, utf16_len};
use crate::Result;

/// Find the next literal occurrence of `query` starting one unit past `from`.
///
/// Offsets are UTF-16 code units in and out. Returns the matched range, or
/// `None` when the query is empty or has no further occurrence. The search
/// does not wrap around to the start.
pub fn find_next(text: &str, query: &str, from: usize) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }
    let map = Utf16Map::new(text);
    let start = from.saturating_add(1);
    if start > map.len() {
        return None;
    }

    let mut at = map.byte_of(start);
    // A start inside a surrogate pair snaps back; step over that character
    if map.offset_of(at) < start {
        at += text[at..].chars().next().map_or(0, char::len_utf8);
    }

    let found = at + text[at..].find(query)?;
    let begin = map.offset_of(found);
    Some((begin, begin + utf16_len(query)))
}

/// Replace every match of the regular expression `pattern` with
/// `replacement`.
///
/// `replacement` may reference capture groups as `$1` or `${name}`. An empty
/// pattern leaves the text unchanged.
///
/// # Errors
///
/// Returns [`crate::Error::Pattern`] when `pattern` is not a valid regex.
pub fn replace_all(text: &str, pattern: &str, replacement: &str) -> Result<String> {
    if pattern.is_empty() {
        return Ok(text.to_string());
    }
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(text, replacement).into_owned())
}
