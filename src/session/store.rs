//! Key-value persistence for the session.
//!
//! The session reads [`CONTENT_KEY`] once when it opens and writes it after
//! every commit. Nothing else in the crate touches a store.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Key under which the active document's source is saved.
pub const CONTENT_KEY: &str = "markdraft_content_v1";

/// Error returned by [`Store::set`].
pub type StoreError = Error;

/// An opaque string key-value store.
pub trait Store {
    /// The value saved under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Save `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), StoreError>;
}

/// A store that lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store kept as a JSON object in a single file.
///
/// The whole object is rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreIo`] if the file exists but cannot be read, and
    /// [`Error::StoreFormat`] if it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }
        let raw = fs::read_to_string(&path).map_err(|source| Error::StoreIo {
            path: path.clone(),
            source,
        })?;
        let entries = serde_json::from_str(&raw).map_err(|source| Error::StoreFormat {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            Error::StoreFormat {
                path: self.path.clone(),
                source,
            }
        })?;
        let io_err = |source: std::io::Error| Error::StoreIo {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
