//! The editing session.
//!
//! This module follows The Elm Architecture (TEA):
//! - [`Session`]: the complete editor state (buffer, tabs, panels)
//! - [`Message`]: every event the editor reacts to
//! - [`update`]: state transitions, committing each edit to the [`Store`]
//!
//! Preview, statistics, outline and exports are derived from the session on
//! demand and never cached.

pub mod commands;
mod model;
mod store;
mod update;

pub use commands::{Action, COMMANDS, Command};
pub use model::{
    Download, FIRST_TAB_NAME, FileTab, Notice, NoticeLevel, Panel, Panels, Session,
};
pub use store::{CONTENT_KEY, JsonFileStore, MemoryStore, Store, StoreError};
pub use update::{Message, update};
