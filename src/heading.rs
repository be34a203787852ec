//! The outline record produced by generators and consumed by the tree view.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One entry in a document's table of contents.
///
/// Headings are produced fresh on every render and never cached by the panel;
/// the generator that extracted them is the single source of truth.
pub struct Heading {
    /// Display text without markup symbols.
    pub text: String,
    /// Nesting depth in the document hierarchy (1 for top-level).
    pub level: usize,
    /// One-based line number of the heading in its source document.
    pub line: usize,
}
