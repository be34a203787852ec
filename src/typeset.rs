//! Math typesetting over the committed tree: the terminal stand-in for a
//! rich-content renderer.
//!
//! Generators whose headings may contain `$...$` math declare a typesetting
//! requirement; after the panel commits a rendered tree, the typesetter (when
//! one is available) rewrites those runs in place. Terminals cannot lay out
//! real math, so the pass maps common TeX commands to Unicode and strips the
//! delimiters.

use ratatui::text::Line;
use std::borrow::Cow;
use std::rc::Rc;

use crate::tree::TocTree;

/// Post-commit typesetting pass over the panel's rendered output.
pub trait Typesetter {
    fn typeset(&self, tree: &mut TocTree);
}

#[derive(Clone)]
/// The rendering registry handed to the panel at construction.
///
/// The registry itself is required; its typesetter is an optional capability,
/// checked at render time.
pub struct RenderRegistry {
    pub typesetter: Option<Rc<dyn Typesetter>>,
}

impl RenderRegistry {
    #[must_use]
    pub fn new(typesetter: Option<Rc<dyn Typesetter>>) -> Self {
        Self { typesetter }
    }

    /// Registry without any typesetter.
    #[must_use]
    pub fn plain() -> Self {
        Self { typesetter: None }
    }

    /// Registry with the Unicode math typesetter installed.
    #[must_use]
    pub fn with_unicode_math() -> Self {
        Self {
            typesetter: Some(Rc::new(UnicodeTypesetter)),
        }
    }
}

/// Rewrites `$...$` runs as Unicode. Longer command names come first so that
/// e.g. `\leq` is not clipped by `\le`.
const SYMBOLS: &[(&str, &str)] = &[
    ("\\lambda", "λ"),
    ("\\epsilon", "ε"),
    ("\\infty", "∞"),
    ("\\theta", "θ"),
    ("\\times", "×"),
    ("\\alpha", "α"),
    ("\\sigma", "σ"),
    ("\\gamma", "γ"),
    ("\\delta", "δ"),
    ("\\omega", "ω"),
    ("\\prod", "∏"),
    ("\\sqrt", "√"),
    ("\\cdot", "·"),
    ("\\beta", "β"),
    ("\\sum", "∑"),
    ("\\int", "∫"),
    ("\\leq", "≤"),
    ("\\geq", "≥"),
    ("\\neq", "≠"),
    ("\\phi", "φ"),
    ("\\to", "→"),
    ("\\pm", "±"),
    ("\\pi", "π"),
    ("\\mu", "μ"),
    ("\\le", "≤"),
    ("\\ge", "≥"),
];

/// Unicode math typesetter for terminal rendering.
pub struct UnicodeTypesetter;

impl UnicodeTypesetter {
    fn typeset_line(line: &mut Line<'static>) {
        for span in &mut line.spans {
            if span.content.contains('$') {
                span.content = Cow::Owned(typeset_str(&span.content));
            }
        }
    }
}

impl Typesetter for UnicodeTypesetter {
    fn typeset(&self, tree: &mut TocTree) {
        for row in tree.rows_mut() {
            Self::typeset_line(&mut row.line);
        }
    }
}

/// Rewrites every balanced `$...$` run in `text`; unbalanced delimiters and
/// surrounding prose pass through untouched.
fn typeset_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('$') {
        let Some(span) = rest[open + 1..].find('$') else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&replace_commands(&rest[open + 1..open + 1 + span]));
        rest = &rest[open + span + 2..];
    }

    out.push_str(rest);
    out
}

fn replace_commands(body: &str) -> String {
    let mut result = body.to_string();
    for (command, symbol) in SYMBOLS {
        if result.contains(command) {
            result = result.replace(command, symbol);
        }
    }
    result
}

#[cfg(test)]
#[path = "tests/typeset.rs"]
mod tests;
