//! Formatting actions offered by the toolbar, shortcuts and palette.

use super::ops::insert_around;

/// Placeholder used when a wrapping action runs on an empty selection.
pub const DEFAULT_PLACEHOLDER: &str = "text";

/// Callout flavours for [`Format::Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Warning,
    Error,
    Success,
}

/// A markup insertion, applied through [`insert_around`].
///
/// Wrapping actions surround the selection (or a placeholder). Block actions
/// insert a fixed snippet at the selection start and keep any selected text
/// after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    // Wrapping
    Bold,
    Italic,
    Strikethrough,
    Highlight,
    InlineCode,
    InlineMath,
    Link,
    Image,
    CodeBlock,

    // Line prefixes
    Heading(u8),
    Blockquote,
    BulletItem,
    NumberedItem,
    TaskItem,
    DoneTaskItem,

    // Block snippets
    HorizontalRule,
    Table,
    TaskList,
    BulletList,
    NumberedList,
    NestedList,
    DefinitionList,
    MathBlock,
    Mermaid,
    Collapsible,
    Alert(AlertKind),
    Badge,
    Progress,
    Video,
    Audio,
}

/// The three strings handed to [`insert_around`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    pub before: &'static str,
    pub after: &'static str,
    pub placeholder: &'static str,
}

const fn wrap(before: &'static str, after: &'static str, placeholder: &'static str) -> Insertion {
    Insertion {
        before,
        after,
        placeholder,
    }
}

const fn prefix(before: &'static str) -> Insertion {
    wrap(before, "", DEFAULT_PLACEHOLDER)
}

/// A multi-line snippet. Without a selection nothing follows it: the
/// placeholder is empty rather than the `text` used by wrapping actions.
const fn block(snippet: &'static str) -> Insertion {
    wrap(snippet, "", "")
}

impl Format {
    /// The markup this action inserts.
    ///
    /// Heading levels outside `1..=6` clamp to the nearest valid level.
    pub const fn insertion(self) -> Insertion {
        match self {
            Self::Bold => wrap("**", "**", DEFAULT_PLACEHOLDER),
            Self::Italic => wrap("*", "*", DEFAULT_PLACEHOLDER),
            Self::Strikethrough => wrap("~~", "~~", DEFAULT_PLACEHOLDER),
            Self::Highlight => wrap("==", "==", DEFAULT_PLACEHOLDER),
            Self::InlineCode => wrap("`", "`", DEFAULT_PLACEHOLDER),
            Self::InlineMath => wrap("$", "$", DEFAULT_PLACEHOLDER),
            Self::Link => wrap("[", "](https://)", "label"),
            Self::Image => wrap("![", "](https://)", "alt text"),
            Self::CodeBlock => wrap("```\n", "\n```", "code here"),

            Self::Heading(0 | 1) => prefix("# "),
            Self::Heading(2) => prefix("## "),
            Self::Heading(3) => prefix("### "),
            Self::Heading(4) => prefix("#### "),
            Self::Heading(5) => prefix("##### "),
            Self::Heading(_) => prefix("###### "),
            Self::Blockquote => prefix("> "),
            Self::BulletItem => prefix("- "),
            Self::NumberedItem => prefix("1. "),
            Self::TaskItem => prefix("- [ ] "),
            Self::DoneTaskItem => prefix("- [x] "),

            Self::HorizontalRule => block("\n---\n"),
            Self::Table => block(
                "| Column 1 | Column 2 | Column 3 |\n\
                 |----------|----------|----------|\n\
                 | Row 1    | Data 1   | Data 2   |\n\
                 | Row 2    | Data 3   | Data 4   |\n\
                 | Row 3    | Data 5   | Data 6   |",
            ),
            Self::TaskList => block("- [ ] Task 1\n- [ ] Task 2\n- [x] Completed task"),
            Self::BulletList => block("- First item\n- Second item\n- Third item"),
            Self::NumberedList => block("1. First item\n2. Second item\n3. Third item"),
            Self::NestedList => block(
                "- Parent item\n  - Child item 1\n  - Child item 2\n    - Grandchild item",
            ),
            Self::DefinitionList => block("Term 1\n: Definition 1\n\nTerm 2\n: Definition 2"),
            Self::MathBlock => block("$$\n\\begin{equation}\n  E = mc^2\n\\end{equation}\n$$"),
            Self::Mermaid => block(
                "```mermaid\ngraph TD\n    A[Start] --> B{Decision}\n    B -->|Yes| C[Action 1]\n    B -->|No| D[Action 2]\n    C --> E[End]\n    D --> E\n```",
            ),
            Self::Collapsible => block(
                "<details>\n<summary>Click to expand</summary>\n\nContent goes here...\n\n</details>",
            ),
            Self::Alert(AlertKind::Info) => block("> [!INFO]\n> This is an informational alert."),
            Self::Alert(AlertKind::Warning) => block("> [!WARNING]\n> This is a warning alert."),
            Self::Alert(AlertKind::Error) => block("> [!ERROR]\n> This is an error alert."),
            Self::Alert(AlertKind::Success) => block("> [!SUCCESS]\n> This is a success alert."),
            Self::Badge => block("![badge](https://img.shields.io/badge/Status-Ready-green)"),
            Self::Progress => block("Progress: [████████░░] 80%"),
            Self::Video => block(
                "<video controls>\n  <source src=\"movie.mp4\" type=\"video/mp4\">\n  Your browser does not support the video tag.\n</video>",
            ),
            Self::Audio => block(
                "<audio controls>\n  <source src=\"audio.mp3\" type=\"audio/mpeg\">\n  Your browser does not support the audio element.\n</audio>",
            ),
        }
    }

    /// Apply this action to `text` over the selection `start..end`.
    ///
    /// Returns the new text and the collapsed cursor position.
    pub fn apply(self, text: &str, start: usize, end: usize) -> (String, usize) {
        let Insertion {
            before,
            after,
            placeholder,
        } = self.insertion();
        insert_around(text, start, end, before, after, placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_wraps_selection() {
        assert_eq!(Format::Bold.apply("hello world", 0, 5).0, "**hello** world");
    }

    #[test]
    fn test_italic_on_caret_inserts_placeholder() {
        assert_eq!(Format::Italic.apply("", 0, 0), ("*text*".to_string(), 6));
    }

    #[test]
    fn test_link_uses_label_placeholder() {
        assert_eq!(Format::Link.apply("", 0, 0).0, "[label](https://)");
    }

    #[test]
    fn test_image_uses_alt_text_placeholder() {
        assert_eq!(Format::Image.apply("", 0, 0).0, "![alt text](https://)");
    }

    #[test]
    fn test_code_block_wraps_on_own_lines() {
        assert_eq!(Format::CodeBlock.apply("", 0, 0).0, "```\ncode here\n```");
    }

    #[test]
    fn test_heading_prefixes_by_level() {
        for level in 1..=6u8 {
            let (text, _) = Format::Heading(level).apply("Title", 0, 5);
            assert_eq!(text, format!("{} Title", "#".repeat(level as usize)));
        }
    }

    #[test]
    fn test_heading_level_clamps() {
        assert_eq!(Format::Heading(0).insertion().before, "# ");
        assert_eq!(Format::Heading(9).insertion().before, "###### ");
    }

    #[test]
    fn test_task_prefixes() {
        assert_eq!(Format::TaskItem.apply("x", 0, 1).0, "- [ ] x");
        assert_eq!(Format::DoneTaskItem.apply("x", 0, 1).0, "- [x] x");
    }

    #[test]
    fn test_block_snippet_has_no_placeholder() {
        let (text, cursor) = Format::HorizontalRule.apply("ab", 1, 1);
        assert_eq!(text, "a\n---\nb");
        assert_eq!(cursor, 6);
    }

    #[test]
    fn test_block_snippet_keeps_selected_text() {
        let (text, _) = Format::BulletList.apply("keep", 0, 4);
        assert_eq!(text, "- First item\n- Second item\n- Third itemkeep");
    }

    #[test]
    fn test_inserted_table_renders_as_table() {
        let (text, _) = Format::Table.apply("", 0, 0);
        let html = crate::render::render(&text);
        assert_eq!(html.matches("<th ").count(), 3);
        assert_eq!(html.matches("<td ").count(), 9);
    }

    #[test]
    fn test_inserted_task_list_renders_checkboxes() {
        let (text, _) = Format::TaskList.apply("", 0, 0);
        let html = crate::render::render(&text);
        assert_eq!(html.matches(r#"type="checkbox""#).count(), 3);
    }

    #[test]
    fn test_alert_snippets_are_blockquotes() {
        for kind in [AlertKind::Info, AlertKind::Warning, AlertKind::Error, AlertKind::Success] {
            assert!(Format::Alert(kind).insertion().before.starts_with("> [!"));
        }
    }
}
