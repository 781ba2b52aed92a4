//! Text editing for the markdown source.
//!
//! The free functions are pure `(text, offsets) -> text` transforms and never
//! touch the preview or the store. [`EditorBuffer`] holds the text and the
//! selection and applies them, for the session to drive.

mod buffer;
mod find;
mod format;
mod offset;
mod ops;

pub use buffer::EditorBuffer;
pub use find::{find_next, replace_all};
pub use format::{AlertKind, DEFAULT_PLACEHOLDER, Format, Insertion};
pub use offset::{Selection, utf16_len};
pub use ops::{duplicate_line, insert_around, line_index, move_line_down, move_line_up};
