//! Plain-text outline generator for setext-style underlined headings.
//!
//! A line underlined with `===` is a level-1 heading, `---` level 2. This
//! generator deliberately implements none of the optional capabilities, so
//! plain-text documents exercise every panel fallback: no toolbar, plain item
//! rendering, no typesetting pass.

use tracing::warn;

use crate::document::DocumentContext;
use crate::generator::Generator;
use crate::heading::Heading;

/// Underline-style table of contents for plain-text documents.
pub struct PlainToc;

impl PlainToc {
    fn extract(source: &str) -> Vec<Heading> {
        let lines: Vec<&str> = source.lines().collect();
        let mut headings = Vec::new();

        for i in 0..lines.len().saturating_sub(1) {
            let text = lines[i].trim();
            if text.is_empty() {
                continue;
            }
            let underline = lines[i + 1].trim_end();
            let level = if is_rule(underline, '=') {
                1
            } else if is_rule(underline, '-') {
                2
            } else {
                continue;
            };
            headings.push(Heading {
                text: text.to_string(),
                level,
                line: i + 1,
            });
        }

        headings
    }
}

fn is_rule(line: &str, rule: char) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == rule)
}

impl Generator for PlainToc {
    fn generate(&self, context: &DocumentContext) -> Vec<Heading> {
        match context.model.text() {
            Ok(source) => Self::extract(&source),
            Err(error) => {
                warn!(path = %context.local_path.display(), %error, "failed to read document");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/plain.rs"]
mod tests;
