use serde::{Deserialize, Serialize};

use super::store::{CONTENT_KEY, Store};
use crate::document::{self, SAMPLE, Stats, TocEntry};
use crate::editor::EditorBuffer;
use crate::export::{self, ExportFormat};
use crate::render::{self, RenderOptions};

/// Name of the tab a session starts with.
pub const FIRST_TAB_NAME: &str = "Untitled Document";

/// A saved snapshot of a document, refreshed on every edit while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTab {
    pub id: u32,
    pub name: String,
    pub content: String,
}

/// Side panels and view modes the editor can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Preview,
    FindReplace,
    Toc,
    Stats,
    CommandPalette,
    Help,
    FocusMode,
    Fullscreen,
}

/// Which panels are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Panels {
    pub preview: bool,
    pub find_replace: bool,
    pub toc: bool,
    pub stats: bool,
    pub command_palette: bool,
    pub help: bool,
    pub focus_mode: bool,
    pub fullscreen: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            preview: true,
            find_replace: false,
            toc: false,
            stats: false,
            command_palette: false,
            help: false,
            focus_mode: false,
            fullscreen: false,
        }
    }
}

impl Panels {
    pub const fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Preview => self.preview,
            Panel::FindReplace => self.find_replace,
            Panel::Toc => self.toc,
            Panel::Stats => self.stats,
            Panel::CommandPalette => self.command_palette,
            Panel::Help => self.help,
            Panel::FocusMode => self.focus_mode,
            Panel::Fullscreen => self.fullscreen,
        }
    }

    pub const fn toggle(&mut self, panel: Panel) {
        let slot = self.slot(panel);
        *slot = !*slot;
    }

    /// Open `panel`, leaving it open if it already is.
    pub const fn open(&mut self, panel: Panel) {
        *self.slot(panel) = true;
    }

    const fn slot(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Preview => &mut self.preview,
            Panel::FindReplace => &mut self.find_replace,
            Panel::Toc => &mut self.toc,
            Panel::Stats => &mut self.stats,
            Panel::CommandPalette => &mut self.command_palette,
            Panel::Help => &mut self.help,
            Panel::FocusMode => &mut self.focus_mode,
            Panel::Fullscreen => &mut self.fullscreen,
        }
    }

    /// Close the overlays dismissed by Escape. View modes stay as they are.
    pub const fn dismiss(&mut self) {
        self.find_replace = false;
        self.stats = false;
        self.toc = false;
        self.command_palette = false;
        self.help = false;
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A short status message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// A file the user asked to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// The editing session: one document buffer, its tabs, and the store it
/// persists to.
pub struct Session<S: Store> {
    pub(super) store: S,
    pub(super) tabs: Vec<FileTab>,
    pub(super) active_id: u32,
    pub(super) buffer: EditorBuffer,
    pub(super) render_options: RenderOptions,
    pub panels: Panels,
    pub find_query: String,
    pub replacement: String,
    pub command_query: String,
    pub(super) notice: Option<Notice>,
    pub(super) download: Option<Download>,
}

impl<S: Store> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("tabs", &self.tabs.len())
            .field("active_id", &self.active_id)
            .field("buffer", &self.buffer)
            .field("panels", &self.panels)
            .finish_non_exhaustive()
    }
}

impl<S: Store> Session<S> {
    /// Start a session, loading saved content from `store`.
    ///
    /// Empty or missing saved content opens the welcome sample instead. The
    /// store is not written until the first commit.
    pub fn open(store: S) -> Self {
        let content = store
            .get(CONTENT_KEY)
            .filter(|saved| !saved.is_empty())
            .unwrap_or_else(|| SAMPLE.to_string());
        Self::with_content(store, &content)
    }

    /// Start a session on `content` as given, even when it is empty.
    ///
    /// The store is not read, and not written until the first commit.
    pub fn with_content(store: S, content: &str) -> Self {
        tracing::debug!(bytes = content.len(), "session opened");

        Self {
            store,
            tabs: vec![FileTab {
                id: 1,
                name: FIRST_TAB_NAME.to_string(),
                content: content.to_string(),
            }],
            active_id: 1,
            buffer: EditorBuffer::from_text(content),
            render_options: RenderOptions::default(),
            panels: Panels::default(),
            find_query: String::new(),
            replacement: String::new(),
            command_query: String::new(),
            notice: None,
            download: None,
        }
    }

    /// Render the preview with `options` from now on.
    #[must_use]
    pub const fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn buffer(&self) -> &EditorBuffer {
        &self.buffer
    }

    /// The current document source.
    pub fn content(&self) -> String {
        self.buffer.text()
    }

    pub fn tabs(&self) -> &[FileTab] {
        &self.tabs
    }

    pub const fn active_id(&self) -> u32 {
        self.active_id
    }

    pub fn active_tab(&self) -> Option<&FileTab> {
        self.tabs.iter().find(|tab| tab.id == self.active_id)
    }

    /// Name of the active tab, used as the export title.
    pub fn active_name(&self) -> &str {
        self.active_tab().map_or(FIRST_TAB_NAME, |tab| tab.name.as_str())
    }

    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the pending download, if an export was requested.
    pub const fn take_download(&mut self) -> Option<Download> {
        self.download.take()
    }

    /// Rendered HTML for the preview pane.
    pub fn preview(&self) -> String {
        render::render_with(&self.content(), &self.render_options)
    }

    pub fn stats(&self) -> Stats {
        document::compute_stats(&self.content())
    }

    pub fn toc(&self) -> Vec<TocEntry> {
        document::generate_toc(&self.content())
    }

    /// Export the current document under the active tab's name.
    pub fn export(&self, format: ExportFormat) -> Download {
        let name = self.active_name();
        Download {
            file_name: export::export_file_name(name, format),
            mime_type: format.mime_type(),
            bytes: export::export_with(&self.content(), name, format, &self.render_options),
        }
    }

    /// Persist the buffer and refresh the active tab's snapshot.
    ///
    /// A failed store write is logged and surfaced as a notice; the edit
    /// itself always stands.
    pub(super) fn commit(&mut self) {
        let content = self.buffer.text();
        if let Err(err) = self.store.set(CONTENT_KEY, &content) {
            tracing::warn!(error = %err, "failed to save document");
            self.notify(NoticeLevel::Error, format!("Could not save: {err}"));
        }
        let active_id = self.active_id;
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == active_id) {
            tab.content = content;
        }
        self.buffer.mark_clean();
        tracing::debug!(tab = active_id, "committed");
    }

    /// Open a fresh empty tab and make it active.
    pub(super) fn new_file(&mut self) {
        let id = self.tabs.iter().map(|tab| tab.id).max().unwrap_or(0) + 1;
        self.tabs.push(FileTab {
            id,
            name: format!("{FIRST_TAB_NAME} {id}"),
            content: String::new(),
        });
        self.activate(id, "");
        tracing::debug!(tab = id, "new file");
    }

    /// Make tab `id` active, loading its snapshot. Unknown ids are ignored.
    pub(super) fn switch_file(&mut self, id: u32) {
        let Some(content) = self
            .tabs
            .iter()
            .find(|tab| tab.id == id)
            .map(|tab| tab.content.clone())
        else {
            tracing::debug!(tab = id, "switch to unknown tab ignored");
            return;
        };
        self.activate(id, &content);
        tracing::debug!(tab = id, "switched file");
    }

    /// Remove tab `id`. The last remaining tab cannot be deleted; deleting
    /// the active tab activates the first remaining one.
    pub(super) fn delete_file(&mut self, id: u32) {
        if self.tabs.len() <= 1 {
            return;
        }
        let before = self.tabs.len();
        self.tabs.retain(|tab| tab.id != id);
        if self.tabs.len() == before {
            return;
        }
        tracing::debug!(tab = id, "deleted file");
        if id == self.active_id {
            let first = &self.tabs[0];
            let (first_id, content) = (first.id, first.content.clone());
            self.activate(first_id, &content);
        }
    }

    pub(super) fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            message: message.into(),
        });
    }

    pub(super) fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn activate(&mut self, id: u32, content: &str) {
        self.active_id = id;
        self.buffer = EditorBuffer::from_text(content);
        self.commit();
    }
}
