// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. export::ExportFormat)
    clippy::module_name_repetitions
)]

//! # Markdraft
//!
//! The core of a markdown authoring tool: a live preview renderer and the
//! text transforms behind an editor's toolbar.
//!
//! Markdraft provides:
//! - A regex-pass renderer producing Tailwind-styled HTML
//! - Selection-aware formatting, line moves and find/replace
//! - Table of contents and reading statistics
//! - Markdown and standalone HTML export
//! - An editing session with file tabs and pluggable persistence
//!
//! ## Architecture
//!
//! The session uses The Elm Architecture (TEA) pattern:
//! - **Model**: [`session::Session`]
//! - **Message**: [`session::Message`]
//! - **Update**: [`session::update`], committing every edit to a store
//!
//! ## Modules
//!
//! - [`render`]: Markdown to HTML
//! - [`editor`]: Text transforms and the editor buffer
//! - [`document`]: Outline and statistics
//! - [`export`]: Download payloads
//! - [`session`]: Editor state, tabs and persistence
//! - [`config`]: Flag files for the command line
//! - [`watcher`]: File watching

pub mod config;
pub mod document;
pub mod editor;
mod error;
pub mod export;
pub mod render;
pub mod session;
pub mod watcher;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::document::{Stats, TocEntry, compute_stats, generate_toc};
    pub use crate::editor::{EditorBuffer, Format, Selection};
    pub use crate::export::ExportFormat;
    pub use crate::render::{RenderOptions, render, render_with};
    pub use crate::session::{MemoryStore, Message, Session, Store, update};
}
