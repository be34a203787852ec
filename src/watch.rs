//! Filesystem change stream feeding the panel's activity monitor.
//!
//! The watcher emits raw per-path events into a channel drained by the shell's
//! event loop, which routes them to the matching document model. No debouncing
//! happens here: collapsing bursts into a single quiet-period event is the
//! activity monitor's job.

use notify::{recommended_watcher, RecommendedWatcher, RecursiveMode, Watcher};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use tracing::{trace, warn};

/// Watches opened documents and surfaces their change events.
pub struct DocumentWatcher {
    watcher: RecommendedWatcher,
    events: Receiver<PathBuf>,
}

impl DocumentWatcher {
    /// # Errors
    ///
    /// Returns an error if the platform watcher cannot be created.
    pub fn new() -> io::Result<Self> {
        let (tx, events) = channel::<PathBuf>();

        let watcher = recommended_watcher(move |result: notify::Result<notify::Event>| {
            match result {
                Ok(event) => {
                    for path in event.paths {
                        trace!(path = %path.display(), "filesystem event");
                        // The receiver going away just means the shell is
                        // shutting down.
                        let _ = tx.send(path);
                    }
                }
                Err(error) => warn!(%error, "filesystem watch error"),
            }
        })
        .map_err(|e| io::Error::other(e.to_string()))?;

        Ok(Self { watcher, events })
    }

    /// # Errors
    ///
    /// Returns an error if the path cannot be watched.
    pub fn watch(&mut self, path: &Path) -> io::Result<()> {
        self.watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|e| io::Error::other(e.to_string()))
    }

    /// Drains pending change events without blocking.
    pub fn drain(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        while let Ok(path) = self.events.try_recv() {
            paths.push(path);
        }
        paths
    }
}
