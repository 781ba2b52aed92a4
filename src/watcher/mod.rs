//! File watching for live re-export.
//!
//! Uses notify crate for cross-platform file system events.
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Watches a single markdown source and emits debounced change notifications.
pub struct SourceWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    watch_root: PathBuf,
    target_path: PathBuf,
    target_name: Option<OsString>,
    ignored: Vec<PathBuf>,
    debounce: Duration,
    pending_since: Option<Instant>,
}

impl SourceWatcher {
    /// Create a watcher for `path`.
    ///
    /// # Errors
    /// Returns an error if the file watcher cannot be created or the path cannot be watched.
    pub fn new(path: impl AsRef<Path>, debounce: Duration) -> notify::Result<Self> {
        // Event paths from the OS are absolute and canonical
        let target_path = canonical(path.as_ref());
        let target_name = target_path.file_name().map(std::ffi::OsStr::to_os_string);
        let watch_root = watch_root_for(&target_path);

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&watch_root, RecursiveMode::NonRecursive)?;
        tracing::debug!(target = %target_path.display(), root = %watch_root.display(), "watching");

        Ok(Self {
            _watcher: watcher,
            rx,
            watch_root,
            target_path,
            target_name,
            ignored: Vec::new(),
            debounce,
            pending_since: None,
        })
    }

    /// Ignore events that only touch `path`, such as our own export output
    /// written next to the source.
    #[must_use]
    pub fn ignoring(mut self, path: impl AsRef<Path>) -> Self {
        self.ignored.push(canonical(path.as_ref()));
        self
    }

    /// The canonical path of the file being watched.
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Returns true once a debounced file change is ready.
    pub fn take_change_ready(&mut self) -> bool {
        let mut saw_relevant_event = false;
        while let Ok(event) = self.rx.try_recv() {
            match event {
                Ok(ev) if self.is_relevant(&ev) => {
                    saw_relevant_event = true;
                }
                Ok(ev) => {
                    tracing::trace!(kind = ?ev.kind, paths = ?ev.paths, "irrelevant event");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "watch error");
                }
            }
        }

        if saw_relevant_event {
            self.pending_since = Some(Instant::now());
        }

        let Some(pending_since) = self.pending_since else {
            return false;
        };
        if pending_since.elapsed() >= self.debounce {
            self.pending_since = None;
            return true;
        }
        false
    }

    fn is_relevant(&self, event: &Event) -> bool {
        if matches!(event.kind, EventKind::Access(_)) {
            return false;
        }
        event
            .paths
            .iter()
            .filter(|path| !self.ignored.iter().any(|ignored| ignored == *path))
            .any(|path| {
                path == &self.watch_root
                    || path == &self.target_path
                    || self
                        .target_name
                        .as_ref()
                        .is_some_and(|name| path.file_name().is_some_and(|f| f == name))
            })
    }
}

fn canonical(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    // A file that does not exist yet: resolve its directory instead
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent
                .canonicalize()
                .map_or_else(|_| path.to_path_buf(), |dir| dir.join(name))
        }
        _ => path.to_path_buf(),
    }
}

fn watch_root_for(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, EventAttributes, ModifyKind};
    use tempfile::tempdir;

    fn event(kind: EventKind, paths: Vec<PathBuf>) -> Event {
        Event {
            kind,
            paths,
            attrs: EventAttributes::new(),
        }
    }

    #[test]
    fn test_directory_level_event_is_relevant_for_watched_file() {
        let dir = tempdir().expect("tempdir");
        let canonical_dir = dir.path().canonicalize().expect("canonicalize");
        let path = canonical_dir.join("doc.md");
        std::fs::write(&path, "# hi").expect("write");
        let watcher = SourceWatcher::new(&path, Duration::from_millis(10)).expect("watcher");

        // Some backends only report the directory
        assert!(watcher.is_relevant(&event(EventKind::Any, vec![canonical_dir])));
    }

    #[test]
    fn test_access_events_are_ignored() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().canonicalize().expect("canonicalize").join("doc.md");
        std::fs::write(&path, "# hi").expect("write");
        let watcher = SourceWatcher::new(&path, Duration::from_millis(10)).expect("watcher");

        let read = event(EventKind::Access(AccessKind::Any), vec![path.clone()]);
        assert!(!watcher.is_relevant(&read));
        let write = event(EventKind::Modify(ModifyKind::Any), vec![path]);
        assert!(watcher.is_relevant(&write));
    }

    #[test]
    fn test_ignored_output_path_is_not_relevant() {
        let dir = tempdir().expect("tempdir");
        let canonical_dir = dir.path().canonicalize().expect("canonicalize");
        let source = canonical_dir.join("doc.md");
        let output = canonical_dir.join("doc.html");
        std::fs::write(&source, "# hi").expect("write");
        let watcher = SourceWatcher::new(&source, Duration::from_millis(10))
            .expect("watcher")
            .ignoring(&output);

        let own_write = event(EventKind::Modify(ModifyKind::Any), vec![output]);
        assert!(!watcher.is_relevant(&own_write));
    }

    #[test]
    fn test_unrelated_sibling_is_not_relevant() {
        let dir = tempdir().expect("tempdir");
        let canonical_dir = dir.path().canonicalize().expect("canonicalize");
        let source = canonical_dir.join("doc.md");
        std::fs::write(&source, "# hi").expect("write");
        let watcher = SourceWatcher::new(&source, Duration::from_millis(10)).expect("watcher");

        let other = event(EventKind::Any, vec![canonical_dir.join("other.md")]);
        assert!(!watcher.is_relevant(&other));
    }

    #[test]
    fn test_watch_root_for_relative_file_is_dot() {
        let root = watch_root_for(Path::new("notes.md"));
        assert_eq!(root, PathBuf::from("."));
    }

    #[test]
    fn test_real_file_modification_detected() {
        let dir = tempdir().expect("tempdir");
        let canonical_dir = dir.path().canonicalize().expect("canonicalize");
        let path = canonical_dir.join("watched.md");
        std::fs::write(&path, "original").expect("write");

        let mut watcher = SourceWatcher::new(&path, Duration::from_millis(50)).expect("watcher");

        // Give the backend time to register the watch
        std::thread::sleep(Duration::from_millis(500));

        std::fs::write(&path, "modified").expect("write");

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut detected = false;
        while Instant::now() < deadline {
            if watcher.take_change_ready() {
                detected = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }

        assert!(
            detected,
            "watcher should detect real file modification within 5 seconds"
        );
    }

    #[test]
    fn test_canonical_event_path_matches_relative_watcher() {
        let dir = tempdir().expect("tempdir");
        let relative_path = dir.path().join("README.md");
        std::fs::write(&relative_path, "# readme").expect("write");
        let watcher =
            SourceWatcher::new(&relative_path, Duration::from_millis(10)).expect("watcher");

        let canonical_dir = dir.path().canonicalize().expect("canonicalize");
        assert!(watcher.is_relevant(&event(EventKind::Any, vec![canonical_dir])));
    }
}
