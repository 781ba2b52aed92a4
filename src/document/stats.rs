//! Word, character and reading-time counts.

use serde::{Deserialize, Serialize};

/// Average reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Document statistics shown alongside the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Maximal runs of non-whitespace
    pub word_count: usize,
    /// Length in UTF-16 code units, the unit the editor's offsets use
    pub char_count: usize,
    /// `ceil(word_count / WORDS_PER_MINUTE)`, zero for an empty document
    pub reading_time_minutes: usize,
}

/// Compute statistics for a markdown source.
pub fn compute_stats(text: &str) -> Stats {
    let word_count = text.split_whitespace().count();
    Stats {
        word_count,
        char_count: text.encode_utf16().count(),
        reading_time_minutes: word_count.div_ceil(WORDS_PER_MINUTE),
    }
}
