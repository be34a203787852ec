//! Generator trait and registry for per-format outline extraction.
//!
//! A generator is a capability set: extraction is required, while the toolbar,
//! the custom item renderer and the math-typesetting flag are each independently
//! optional. Absence of an optional capability is never an error; the panel
//! falls back to a defined default for each one.

use ratatui::text::Line;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use crate::document::DocumentContext;
use crate::heading::Heading;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Generator-supplied toolbar fragment, cached only while its generator is
/// current.
pub struct Toolbar {
    pub label: String,
}

/// Extracts an ordered heading outline from one document type.
pub trait Generator {
    /// Produces the document's outline, evaluated fresh on every call.
    fn generate(&self, context: &DocumentContext) -> Vec<Heading>;

    /// Optional toolbar fragment, invoked once at selection time.
    fn toolbar(&self) -> Option<Toolbar> {
        None
    }

    /// Optional per-heading renderer; `None` means plain-text fallback.
    fn render_item(&self, _heading: &Heading) -> Option<Line<'static>> {
        None
    }

    /// Whether rendered output needs a math typesetting pass after commit.
    fn requires_math_typesetting(&self) -> bool {
        false
    }
}

#[derive(Default)]
/// Dispatches documents to generators by lowercase file extension.
pub struct GeneratorRegistry {
    by_extension: HashMap<String, Rc<dyn Generator>>,
}

impl GeneratorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, extensions: &[&str], generator: Rc<dyn Generator>) {
        for extension in extensions {
            self.by_extension
                .insert(extension.to_ascii_lowercase(), generator.clone());
        }
    }

    #[must_use]
    pub fn find(&self, path: &Path) -> Option<Rc<dyn Generator>> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        self.by_extension.get(&extension).cloned()
    }
}
