//! The reactive table-of-contents panel.
//!
//! The panel holds one piece of state worth the name: the current selection
//! (document plus outline generator). Everything it does is a reaction to
//! discrete events on the host's event loop. A selection change tears down the
//! old activity monitor, arms a new one over the document's change stream and
//! renders immediately; after that, renders fire when the monitor reports a
//! quiet period, when the host requests an update, or when the panel is shown
//! again after being hidden. Extraction, tree layout and typesetting all belong
//! to collaborators.

use ratatui::text::Line;
use std::rc::Rc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

use crate::document::{DocumentContext, DocumentId, DocumentManager};
use crate::generator::{Generator, Toolbar};
use crate::heading::Heading;
use crate::monitor::{ActivityMonitor, ActivitySource};
use crate::tree::TocTree;
use crate::typeset::RenderRegistry;

/// Title shown when no document is selected.
pub const DEFAULT_TITLE: &str = "Table of Contents";

/// Silence required after the last edit before the outline refreshes.
pub const ACTIVITY_QUIET_PERIOD: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum PanelError {
    /// A selection was set for a document the manager cannot resolve. This is
    /// an integration error, not a recoverable runtime condition: a selection
    /// should never name a document without a backing model.
    #[error("no document context resolved for {0}")]
    UnresolvedDocument(DocumentId),
}

#[derive(Clone)]
/// The document currently shown in the panel and its extraction capability.
///
/// Replaced wholesale on every selection change, never mutated in place.
pub struct Selection {
    pub document: DocumentId,
    pub generator: Rc<dyn Generator>,
}

/// Live-updating table of contents for the active document.
pub struct Panel {
    manager: Rc<dyn DocumentManager>,
    renderers: RenderRegistry,
    current: Option<Selection>,
    context: Option<Rc<DocumentContext>>,
    monitor: Option<ActivityMonitor>,
    toolbar: Option<Toolbar>,
    tree: TocTree,
}

impl Panel {
    /// Both collaborators are required and immutable for the panel's lifetime.
    #[must_use]
    pub fn new(manager: Rc<dyn DocumentManager>, renderers: RenderRegistry) -> Self {
        Self {
            manager,
            renderers,
            current: None,
            context: None,
            monitor: None,
            toolbar: None,
            tree: TocTree::empty(DEFAULT_TITLE),
        }
    }

    /// Replaces the current selection.
    ///
    /// Setting the same (document, generator) pair again is a guaranteed no-op:
    /// no re-render, no monitor churn. Otherwise the old monitor and toolbar
    /// are invalidated before anything else happens, so no render can ever
    /// observe a monitor bound to a stale document. A present selection must
    /// resolve to a document context; on success a fresh monitor is armed with
    /// the fixed quiet period and one render fires immediately, so the panel
    /// shows content before the first quiet period elapses.
    ///
    /// # Errors
    ///
    /// [`PanelError::UnresolvedDocument`] when the manager cannot resolve the
    /// selected document. The prior monitor is already disposed at that point.
    pub fn set_current(&mut self, next: Option<Selection>) -> Result<(), PanelError> {
        if let (Some(current), Some(next)) = (&self.current, &next) {
            if current.document == next.document && Rc::ptr_eq(&current.generator, &next.generator)
            {
                return Ok(());
            }
        }

        self.toolbar = next.as_ref().and_then(|selection| selection.generator.toolbar());
        self.monitor = None;
        self.context = None;
        self.current = next;

        let Some(selection) = self.current.clone() else {
            debug!("selection cleared");
            self.render();
            return Ok(());
        };

        let context = self
            .manager
            .resolve(&selection.document)
            .ok_or_else(|| PanelError::UnresolvedDocument(selection.document.clone()))?;

        let source: Rc<dyn ActivitySource> = context.model.clone();
        self.monitor = Some(ActivityMonitor::new(source, ACTIVITY_QUIET_PERIOD));
        self.context = Some(context);
        debug!(document = %selection.document, "selection changed, monitor armed");
        self.render();
        Ok(())
    }

    /// Re-renders the tree from the current outline.
    ///
    /// The generator is the single source of truth: its outline is extracted
    /// fresh on every call and never cached here. After the tree commit, the
    /// typesetter runs when the generator requires it and one is available.
    pub fn render(&mut self) {
        let current = self.current.clone();
        let context = self.context.clone();

        if let (Some(selection), Some(context)) = (current, context) {
            let generator = selection.generator;
            let outline = generator.generate(&context);
            let title = context.base_name();
            debug!(title = %title, headings = outline.len(), "rendering outline");

            let item_renderer = {
                let generator = generator.clone();
                move |heading: &Heading| {
                    generator
                        .render_item(heading)
                        .unwrap_or_else(|| Line::from(heading.text.clone()))
                }
            };
            self.tree
                .rebuild(&title, outline, item_renderer, self.toolbar.clone());

            if generator.requires_math_typesetting() {
                if let Some(typesetter) = self.renderers.typesetter.clone() {
                    typesetter.typeset(&mut self.tree);
                }
            }
        } else {
            self.tree.rebuild(
                DEFAULT_TITLE,
                Vec::new(),
                |heading| Line::from(heading.text.clone()),
                None,
            );
        }
    }

    /// Drives the activity monitor; a reported quiet period triggers a render.
    pub fn poll(&mut self, now: Instant) {
        let fired = self.monitor.as_mut().is_some_and(|monitor| monitor.poll(now));
        if fired {
            debug!("document activity settled, re-rendering");
            self.render();
        }
    }

    /// Host-requested refresh.
    ///
    /// An earlier revision skipped this while the panel was not visible; that
    /// gate is intentionally disabled, so an update request always re-renders.
    pub fn on_update_request(&mut self) {
        self.render();
    }

    /// Called when the panel becomes visible again: content may have gone
    /// stale while hidden, so render unconditionally.
    pub fn on_after_show(&mut self) {
        self.render();
    }

    /// Generator of the current selection, if any.
    #[must_use]
    pub fn generator(&self) -> Option<Rc<dyn Generator>> {
        self.current.as_ref().map(|selection| selection.generator.clone())
    }

    #[must_use]
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn toolbar(&self) -> Option<&Toolbar> {
        self.toolbar.as_ref()
    }

    #[must_use]
    pub fn monitor(&self) -> Option<&ActivityMonitor> {
        self.monitor.as_ref()
    }

    /// The committed display surface the shell draws every frame.
    #[must_use]
    pub fn tree(&self) -> &TocTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut TocTree {
        &mut self.tree
    }
}

#[cfg(test)]
#[path = "tests/panel.rs"]
mod tests;
