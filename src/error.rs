//! Library error type.

use std::path::PathBuf;

/// Errors raised at the fallible edges of the core: store persistence and
/// user-supplied search patterns. Rendering and text edits never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file-backed store failed.
    #[error("store I/O failed for {path}: {source}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file-backed store held something other than a JSON string map.
    #[error("store at {path} is not a valid JSON map: {source}")]
    StoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The find/replace pattern did not compile.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
