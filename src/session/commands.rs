//! Command palette entries.

use super::model::Panel;
use super::update::Message;
use crate::editor::Format;
use crate::export::ExportFormat;

/// What a palette command does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Format(Format),
    DuplicateLine,
    MoveLineUp,
    MoveLineDown,
    Toggle(Panel),
    Open(Panel),
    Export(ExportFormat),
    NewFile,
}

/// A named command with its keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub shortcut: &'static str,
    pub action: Action,
}

impl Command {
    const fn new(name: &'static str, shortcut: &'static str, action: Action) -> Self {
        Self {
            name,
            shortcut,
            action,
        }
    }

    /// The session message this command sends.
    pub const fn message(&self) -> Message {
        match self.action {
            Action::Format(format) => Message::Format(format),
            Action::DuplicateLine => Message::DuplicateLine,
            Action::MoveLineUp => Message::MoveLineUp,
            Action::MoveLineDown => Message::MoveLineDown,
            Action::Toggle(panel) => Message::TogglePanel(panel),
            Action::Open(panel) => Message::OpenPanel(panel),
            Action::Export(format) => Message::Export(format),
            Action::NewFile => Message::NewFile,
        }
    }
}

/// All palette commands, in display order.
pub static COMMANDS: &[Command] = &[
    Command::new("Bold", "Ctrl+B", Action::Format(Format::Bold)),
    Command::new("Italic", "Ctrl+I", Action::Format(Format::Italic)),
    Command::new("Heading 1", "Ctrl+1", Action::Format(Format::Heading(1))),
    Command::new("Heading 2", "Ctrl+2", Action::Format(Format::Heading(2))),
    Command::new("Heading 3", "Ctrl+3", Action::Format(Format::Heading(3))),
    Command::new("Code Block", "Ctrl+Shift+C", Action::Format(Format::CodeBlock)),
    Command::new("Table", "Ctrl+T", Action::Format(Format::Table)),
    Command::new("Link", "Ctrl+K", Action::Format(Format::Link)),
    Command::new("Image", "Ctrl+Shift+I", Action::Format(Format::Image)),
    Command::new("Unordered List", "Ctrl+U", Action::Format(Format::BulletItem)),
    Command::new("Ordered List", "Ctrl+O", Action::Format(Format::NumberedItem)),
    Command::new("Checkbox", "Ctrl+Shift+X", Action::Format(Format::TaskItem)),
    Command::new("Blockquote", "Ctrl+Shift+Q", Action::Format(Format::Blockquote)),
    Command::new("Horizontal Rule", "Ctrl+Shift+H", Action::Format(Format::HorizontalRule)),
    Command::new("Strikethrough", "Ctrl+Shift+S", Action::Format(Format::Strikethrough)),
    Command::new("Highlight", "Ctrl+Shift+G", Action::Format(Format::Highlight)),
    Command::new("Math Inline", "Ctrl+Shift+M", Action::Format(Format::InlineMath)),
    Command::new("Math Block", "Ctrl+Shift+B", Action::Format(Format::MathBlock)),
    Command::new("Mermaid Diagram", "Ctrl+Shift+D", Action::Format(Format::Mermaid)),
    Command::new("Duplicate Line", "Ctrl+D", Action::DuplicateLine),
    Command::new("Move Line Up", "Alt+Up", Action::MoveLineUp),
    Command::new("Move Line Down", "Alt+Down", Action::MoveLineDown),
    Command::new("Toggle Focus Mode", "F11", Action::Toggle(Panel::FocusMode)),
    Command::new("Toggle Fullscreen", "F12", Action::Toggle(Panel::Fullscreen)),
    Command::new("Find & Replace", "Ctrl+F", Action::Open(Panel::FindReplace)),
    Command::new("Export Markdown", "Ctrl+E", Action::Export(ExportFormat::Markdown)),
    Command::new("Export HTML", "Ctrl+Shift+E", Action::Export(ExportFormat::Html)),
    Command::new("New File", "Ctrl+N", Action::NewFile),
];

/// Commands whose name contains `query`, ignoring case. An empty query
/// matches everything.
pub fn filter(query: &str) -> impl Iterator<Item = &'static Command> + '_ {
    let needle = query.to_lowercase();
    COMMANDS
        .iter()
        .filter(move |command| command.name.to_lowercase().contains(&needle))
}

/// The command bound to `shortcut`, compared case-insensitively.
pub fn by_shortcut(shortcut: &str) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|command| command.shortcut.eq_ignore_ascii_case(shortcut))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_everything() {
        assert_eq!(filter("").count(), COMMANDS.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let names: Vec<_> = filter("LINE").map(|c| c.name).collect();
        assert_eq!(
            names,
            ["Math Inline", "Duplicate Line", "Move Line Up", "Move Line Down"]
        );
    }

    #[test]
    fn test_filter_no_match() {
        assert_eq!(filter("zzz").count(), 0);
    }

    #[test]
    fn test_shortcuts_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for command in COMMANDS {
            assert!(seen.insert(command.shortcut), "duplicate {}", command.shortcut);
        }
    }

    #[test]
    fn test_by_shortcut() {
        let command = by_shortcut("ctrl+b").unwrap();
        assert_eq!(command.name, "Bold");
        assert_eq!(command.message(), Message::Format(Format::Bold));
        assert!(by_shortcut("Ctrl+Q").is_none());
    }

    #[test]
    fn test_command_messages() {
        assert_eq!(by_shortcut("Ctrl+N").unwrap().message(), Message::NewFile);
        assert_eq!(
            by_shortcut("F11").unwrap().message(),
            Message::TogglePanel(Panel::FocusMode)
        );
        assert_eq!(
            by_shortcut("Ctrl+E").unwrap().message(),
            Message::Export(ExportFormat::Markdown)
        );
    }

    #[test]
    fn test_list_shortcuts_insert_a_single_item() {
        assert_eq!(
            by_shortcut("Ctrl+U").unwrap().message(),
            Message::Format(Format::BulletItem)
        );
        assert_eq!(
            by_shortcut("Ctrl+O").unwrap().message(),
            Message::Format(Format::NumberedItem)
        );
    }

    #[test]
    fn test_find_replace_opens_rather_than_toggles() {
        assert_eq!(
            by_shortcut("Ctrl+F").unwrap().message(),
            Message::OpenPanel(Panel::FindReplace)
        );
    }
}
