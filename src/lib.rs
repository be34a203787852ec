//! synopsis: a live table of contents for documents under edit.
//!
//! The crate is organised around a single reactive [`panel::Panel`] that tracks
//! the active document, debounces its change activity through a
//! [`monitor::ActivityMonitor`], and re-renders a navigable heading tree by
//! delegating extraction to pluggable [`generator::Generator`]s. Everything
//! else is a collaborator: the document manager resolves paths to models, the
//! tree view displays whatever the panel commits, and the typesetter touches up
//! math in the committed rows.

pub mod app_state;
pub mod config;
pub mod document;
pub mod formats;
pub mod generator;
pub mod heading;
pub mod input;
pub mod monitor;
pub mod panel;
pub mod tree;
pub mod typeset;
pub mod ui;
pub mod watch;
