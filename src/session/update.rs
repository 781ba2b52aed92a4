use super::commands;
use super::model::{NoticeLevel, Panel, Session};
use super::store::Store;
use crate::editor::Format;
use crate::export::ExportFormat;

/// Every event the session reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Replace the source, as typing does
    SetText(String),
    /// Move the selection; offsets are UTF-16 units
    Select { start: usize, end: usize },
    /// Apply a toolbar/shortcut formatting action
    Format(Format),
    /// Wrap the selection in arbitrary markup
    InsertAround {
        before: String,
        after: String,
        placeholder: String,
    },
    DuplicateLine,
    MoveLineUp,
    MoveLineDown,
    /// Replace the source with an imported file's contents
    Import(String),

    // Find & replace
    SetFindQuery(String),
    SetReplacement(String),
    FindNext,
    ReplaceAll,

    // Files
    NewFile,
    SwitchFile(u32),
    DeleteFile(u32),
    /// Queue a download of the current document
    Export(ExportFormat),

    // Panels
    TogglePanel(Panel),
    OpenPanel(Panel),
    /// Escape: close the overlays
    Dismiss,
    SetCommandQuery(String),
    /// Run the n-th command matching the palette query
    RunCommand(usize),
}

/// Apply `msg` to `session` and return the new state.
///
/// Edits commit immediately: the store is written and the active tab's
/// snapshot refreshed.
pub fn update<S: Store>(mut session: Session<S>, msg: Message) -> Session<S> {
    if !matches!(msg, Message::Select { .. }) {
        session.clear_notice();
    }

    match msg {
        // Editing
        Message::SetText(text) => {
            session.buffer.set_text(&text);
            session.commit();
        }
        Message::Select { start, end } => session.buffer.select(start, end),
        Message::Format(format) => {
            session.buffer.apply_format(format);
            session.commit();
        }
        Message::InsertAround {
            before,
            after,
            placeholder,
        } => {
            session.buffer.insert_around(&before, &after, &placeholder);
            session.commit();
        }
        Message::DuplicateLine => {
            session.buffer.duplicate_line();
            session.commit();
        }
        Message::MoveLineUp => {
            session.buffer.move_line_up();
            session.commit();
        }
        Message::MoveLineDown => {
            session.buffer.move_line_down();
            session.commit();
        }
        Message::Import(content) => {
            session.buffer.set_text(&content);
            session.commit();
        }

        // Find & replace
        Message::SetFindQuery(query) => session.find_query = query,
        Message::SetReplacement(replacement) => session.replacement = replacement,
        Message::FindNext => {
            let query = session.find_query.clone();
            if !query.is_empty() && !session.buffer.find_next(&query) {
                session.notify(NoticeLevel::Info, format!("No more matches for \"{query}\""));
            }
        }
        Message::ReplaceAll => {
            let (pattern, replacement) = (session.find_query.clone(), session.replacement.clone());
            match session.buffer.replace_all(&pattern, &replacement) {
                Ok(true) => session.commit(),
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(pattern = %pattern, error = %err, "replace rejected");
                    session.notify(NoticeLevel::Warning, err.to_string());
                }
            }
        }

        // Files
        Message::NewFile => session.new_file(),
        Message::SwitchFile(id) => session.switch_file(id),
        Message::DeleteFile(id) => session.delete_file(id),
        Message::Export(format) => {
            session.download = Some(session.export(format));
        }

        // Panels
        Message::TogglePanel(panel) => {
            session.panels.toggle(panel);
            if panel == Panel::CommandPalette {
                session.command_query.clear();
            }
        }
        Message::OpenPanel(panel) => {
            session.panels.open(panel);
            if panel == Panel::CommandPalette {
                session.command_query.clear();
            }
        }
        Message::Dismiss => {
            session.panels.dismiss();
            session.command_query.clear();
        }
        Message::SetCommandQuery(query) => session.command_query = query,
        Message::RunCommand(index) => {
            let command = commands::filter(&session.command_query).nth(index);
            session.panels.command_palette = false;
            session.command_query.clear();
            if let Some(command) = command {
                tracing::debug!(command = command.name, "run command");
                return update(session, command.message());
            }
        }
    }

    session
}
