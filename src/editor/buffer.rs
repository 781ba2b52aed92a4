use ropey::Rope;

use super::find;
use super::format::Format;
use super::offset::Selection;
use super::ops;
use crate::Result;

/// A text buffer backed by a rope, with the editor's current selection.
///
/// Every edit goes through the pure functions in [`ops`], [`find`] and
/// [`Format`]; the buffer only owns the text, the selection and the dirty
/// flag. The selection is always clamped to the text length.
pub struct EditorBuffer {
    rope: Rope,
    selection: Selection,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, with the caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            dirty: false,
        }
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.rope.len_utf16_cu()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// The current selection.
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// The selection start, where line operations and searches begin.
    pub const fn cursor(&self) -> usize {
        self.selection.start
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Replace the whole text, as typing into the editor does.
    ///
    /// The selection is kept and clamped to the new length.
    pub fn set_text(&mut self, text: &str) {
        if self.rope == text {
            return;
        }
        self.replace(text, self.selection);
    }

    /// Set the selection. Reversed ends are swapped and both are clamped.
    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end).clamped(self.len());
    }

    /// Apply a formatting action to the selection.
    pub fn apply_format(&mut self, format: Format) {
        let Selection { start, end } = self.selection;
        let (text, cursor) = format.apply(&self.text(), start, end);
        self.replace(&text, Selection::caret(cursor));
    }

    /// Wrap the selection in arbitrary markup.
    pub fn insert_around(&mut self, before: &str, after: &str, placeholder: &str) {
        let Selection { start, end } = self.selection;
        let (text, cursor) = ops::insert_around(&self.text(), start, end, before, after, placeholder);
        self.replace(&text, Selection::caret(cursor));
    }

    /// Duplicate the line holding the cursor.
    pub fn duplicate_line(&mut self) {
        let text = ops::duplicate_line(&self.text(), self.cursor());
        self.replace(&text, self.selection);
    }

    /// Swap the cursor's line with the one above.
    pub fn move_line_up(&mut self) {
        let text = ops::move_line_up(&self.text(), self.cursor());
        self.replace(&text, self.selection);
    }

    /// Swap the cursor's line with the one below.
    pub fn move_line_down(&mut self) {
        let text = ops::move_line_down(&self.text(), self.cursor());
        self.replace(&text, self.selection);
    }

    /// Select the next occurrence of `query` after the cursor.
    ///
    /// Returns `false` and leaves the selection alone when nothing is found.
    pub fn find_next(&mut self, query: &str) -> bool {
        match find::find_next(&self.text(), query, self.cursor()) {
            Some((start, end)) => {
                self.selection = Selection::new(start, end);
                true
            }
            None => false,
        }
    }

    /// Replace every regex match of `pattern` in the buffer.
    ///
    /// Returns whether the text changed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Pattern`] for an invalid pattern; the buffer
    /// is left untouched.
    pub fn replace_all(&mut self, pattern: &str, replacement: &str) -> Result<bool> {
        let text = find::replace_all(&self.text(), pattern, replacement)?;
        if self.rope == text.as_str() {
            return Ok(false);
        }
        self.replace(&text, self.selection);
        Ok(true)
    }

    fn replace(&mut self, text: &str, selection: Selection) {
        self.rope = Rope::from_str(text);
        self.selection = selection.clamped(self.len());
        self.dirty = true;
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("selection", &self.selection)
            .field("dirty", &self.dirty)
            .finish()
    }
}
