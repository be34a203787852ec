//! Document manager collaborator: resolves documents to their backing models.
//!
//! A document is identified by a canonical path key. Its model re-reads the
//! file on demand (the panel never caches content) and accumulates change
//! notifications routed in from the filesystem watcher, which makes it the
//! activity source the panel's monitor polls.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;

use crate::monitor::ActivitySource;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// Stable identity of an open document, keyed by canonical path.
pub struct DocumentId(PathBuf);

impl DocumentId {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Canonicalizes where possible so watcher events and open paths agree.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        Self(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// The backing model of one document.
///
/// Content is read fresh from disk on every request; pending change
/// notifications accumulate in a counter until the monitor drains them.
pub struct DocumentModel {
    path: PathBuf,
    pending: Cell<u32>,
}

impl DocumentModel {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            pending: Cell::new(0),
        }
    }

    /// Current document text, read fresh from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn text(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    /// Records one content-change notification.
    pub fn notify_changed(&self) {
        self.pending.set(self.pending.get().saturating_add(1));
    }
}

impl ActivitySource for DocumentModel {
    fn take_activity(&self) -> u32 {
        self.pending.replace(0)
    }
}

/// Resolved context for a document: its local path plus its model.
pub struct DocumentContext {
    pub local_path: PathBuf,
    pub model: Rc<DocumentModel>,
}

impl DocumentContext {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            model: Rc::new(DocumentModel::new(path.clone())),
            local_path: path,
        }
    }

    /// Base filename of the document, used as the panel title.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.local_path.file_name().map_or_else(
            || self.local_path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Maps a document identity to its resolved context, if any.
///
/// The panel depends on this seam only; tests substitute a stub manager.
pub trait DocumentManager {
    fn resolve(&self, document: &DocumentId) -> Option<Rc<DocumentContext>>;
}

#[derive(Default)]
/// File-backed manager for documents opened from the command line.
pub struct FileDocumentManager {
    docs: RefCell<HashMap<DocumentId, Rc<DocumentContext>>>,
}

impl FileDocumentManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file and returns its identity, reusing any existing entry.
    pub fn open(&self, path: &Path) -> DocumentId {
        let id = DocumentId::for_path(path);
        self.docs
            .borrow_mut()
            .entry(id.clone())
            .or_insert_with(|| Rc::new(DocumentContext::new(id.path().to_path_buf())));
        id
    }

    /// Routes a filesystem change event to the matching model.
    ///
    /// Returns false when the path does not belong to any open document.
    pub fn dispatch_change(&self, path: &Path) -> bool {
        let id = DocumentId::for_path(path);
        match self.docs.borrow().get(&id) {
            Some(context) => {
                debug!(document = %id, "change notification routed");
                context.model.notify_changed();
                true
            }
            None => false,
        }
    }
}

impl DocumentManager for FileDocumentManager {
    fn resolve(&self, document: &DocumentId) -> Option<Rc<DocumentContext>> {
        self.docs.borrow().get(document).cloned()
    }
}
