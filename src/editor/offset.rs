//! Selection offsets and their mapping onto Rust string indices.
//!
//! Offsets arrive in UTF-16 code units, which is what a browser textarea
//! reports. All slicing happens on UTF-8 byte indices, so every operation
//! maps through a [`Utf16Map`] first.

use ropey::Rope;

/// A selection `(start, end)` in UTF-16 code units, `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection, swapping the ends if they arrive reversed.
    pub const fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A collapsed selection (caret) at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Whether the selection covers no text.
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Clamp both ends into `[0, len]`.
    #[must_use]
    pub fn clamped(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

/// Maps UTF-16 offsets to byte indices and back for one text.
pub(crate) struct Utf16Map {
    rope: Rope,
}

impl Utf16Map {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Text length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.rope.len_utf16_cu()
    }

    /// Byte index for a UTF-16 offset.
    ///
    /// Offsets past the end clamp to the end; an offset inside a surrogate
    /// pair lands on the start of that character.
    pub fn byte_of(&self, offset: usize) -> usize {
        let char_idx = self.rope.utf16_cu_to_char(offset.min(self.len()));
        self.rope.char_to_byte(char_idx)
    }

    /// UTF-16 offset for a byte index on a character boundary.
    pub fn offset_of(&self, byte: usize) -> usize {
        let char_idx = self.rope.byte_to_char(byte.min(self.rope.len_bytes()));
        self.rope.char_to_utf16_cu(char_idx)
    }
}

/// Length of a string in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
