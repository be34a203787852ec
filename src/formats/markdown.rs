//! Markdown outline generator using tree-sitter-md.
//!
//! ATX-style headings (# syntax) are collected with a tree-sitter query; the
//! heading level comes from the marker node kind and the title from the inline
//! node. Markdown headings may carry `$...$` math, so this generator asks for
//! the typesetting pass and styles its own items by level.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use streaming_iterator::StreamingIterator;
use tracing::warn;

use crate::document::DocumentContext;
use crate::generator::{Generator, Toolbar};
use crate::heading::Heading;

const HEADING_QUERY: &str = "(atx_heading) @heading";

/// Tree-sitter backed table of contents for markdown documents.
pub struct MarkdownToc;

impl MarkdownToc {
    fn extract(source: &str) -> Vec<Heading> {
        let language: tree_sitter::Language = tree_sitter_md::LANGUAGE.into();

        let mut parser = tree_sitter::Parser::new();
        if parser.set_language(&language).is_err() {
            return Vec::new();
        }
        let Some(tree) = parser.parse(source, None) else {
            return Vec::new();
        };
        let Ok(query) = tree_sitter::Query::new(&language, HEADING_QUERY) else {
            return Vec::new();
        };

        let mut headings = Vec::new();
        let mut cursor = tree_sitter::QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
        while let Some(matched) = matches.next() {
            for capture in matched.captures {
                if let Some(heading) = heading_from_node(capture.node, source) {
                    headings.push(heading);
                }
            }
        }
        headings
    }
}

fn heading_from_node(node: tree_sitter::Node, source: &str) -> Option<Heading> {
    let mut level = 0;
    let mut text = String::new();

    let mut walk = node.walk();
    for child in node.children(&mut walk) {
        match child.kind() {
            "atx_h1_marker" => level = 1,
            "atx_h2_marker" => level = 2,
            "atx_h3_marker" => level = 3,
            "atx_h4_marker" => level = 4,
            "atx_h5_marker" => level = 5,
            "atx_h6_marker" => level = 6,
            "inline" => {
                text = child.utf8_text(source.as_bytes()).ok()?.trim().to_string();
            }
            _ => {}
        }
    }

    if level == 0 {
        return None;
    }

    Some(Heading {
        text,
        level,
        line: node.start_position().row + 1,
    })
}

impl Generator for MarkdownToc {
    fn generate(&self, context: &DocumentContext) -> Vec<Heading> {
        match context.model.text() {
            Ok(source) => Self::extract(&source),
            Err(error) => {
                warn!(path = %context.local_path.display(), %error, "failed to read document");
                Vec::new()
            }
        }
    }

    fn toolbar(&self) -> Option<Toolbar> {
        Some(Toolbar {
            label: "markdown".to_string(),
        })
    }

    fn render_item(&self, heading: &Heading) -> Option<Line<'static>> {
        let style = match heading.level {
            1 => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            2 => Style::default().fg(Color::Blue),
            _ => Style::default(),
        };
        Some(Line::from(Span::styled(heading.text.clone(), style)))
    }

    fn requires_math_typesetting(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
