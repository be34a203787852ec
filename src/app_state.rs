//! Shell state binding the open documents to the table-of-contents panel.
//!
//! The shell is the panel's host: it decides which document is active, feeds
//! filesystem change events into the right model, and pumps the panel once per
//! event-loop tick. Everything the panel itself needs to know travels through
//! its selection setter.

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;
use tracing::debug;

use crate::document::{DocumentId, FileDocumentManager};
use crate::generator::GeneratorRegistry;
use crate::panel::{Panel, PanelError, Selection};

/// Host application state for the panel and its document list.
pub struct AppState {
    /// Documents opened from the command line, in display order.
    pub documents: Vec<(DocumentId, PathBuf)>,
    /// Index of the active document in `documents`.
    pub active: usize,
    /// The table-of-contents panel itself.
    pub panel: Panel,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    manager: Rc<FileDocumentManager>,
    registry: GeneratorRegistry,
}

impl AppState {
    #[must_use]
    pub fn new(
        manager: Rc<FileDocumentManager>,
        registry: GeneratorRegistry,
        documents: Vec<(DocumentId, PathBuf)>,
        panel: Panel,
    ) -> Self {
        Self {
            documents,
            active: 0,
            panel,
            message: None,
            manager,
            registry,
        }
    }

    /// Makes the document at `index` (wrapping) the panel's current selection.
    ///
    /// A document without a registered generator clears the selection, leaving
    /// the panel on its default empty view.
    ///
    /// # Errors
    ///
    /// Propagates the panel's integration error when the document cannot be
    /// resolved to a context.
    pub fn activate(&mut self, index: usize) -> Result<(), PanelError> {
        if self.documents.is_empty() {
            return self.panel.set_current(None);
        }

        self.active = index % self.documents.len();
        let (id, path) = &self.documents[self.active];

        let selection = self.registry.find(path).map(|generator| Selection {
            document: id.clone(),
            generator,
        });
        if selection.is_none() {
            self.message = Some(format!("no outline generator for {}", path.display()));
        }
        self.panel.set_current(selection)
    }

    /// # Errors
    ///
    /// See [`AppState::activate`].
    pub fn activate_next(&mut self) -> Result<(), PanelError> {
        self.activate(self.active + 1)
    }

    /// # Errors
    ///
    /// See [`AppState::activate`].
    pub fn activate_prev(&mut self) -> Result<(), PanelError> {
        self.activate(self.active + self.documents.len().saturating_sub(1))
    }

    /// Routes one filesystem change event into the matching document model.
    pub fn dispatch_change(&self, path: &Path) {
        if !self.manager.dispatch_change(path) {
            debug!(path = %path.display(), "change event for unknown document ignored");
        }
    }

    /// Drives the panel's debounced re-rendering.
    pub fn pump(&mut self, now: Instant) {
        self.panel.poll(now);
    }

    /// Reports the selected heading's location in the status bar.
    pub fn locate_selected(&mut self) {
        let Some((_, path)) = self.documents.get(self.active) else {
            return;
        };
        if let Some(row) = self.panel.tree().selected() {
            self.message = Some(format!(
                "{} → {}:{}",
                row.heading.text,
                path.display(),
                row.heading.line
            ));
        }
    }
}
