use super::MarkdownToc;
use crate::document::DocumentContext;
use crate::generator::Generator;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn context_for(content: &str) -> (NamedTempFile, DocumentContext) {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    let context = DocumentContext::new(file.path().to_path_buf());
    (file, context)
}

#[test]
fn extracts_atx_headings_with_levels_and_lines() {
    let (_file, context) =
        context_for("# Alpha\n\nbody\n\n## Beta\n\nmore\n\n### Gamma\n");
    let headings = MarkdownToc.generate(&context);

    assert_eq!(headings.len(), 3);
    assert_eq!(headings[0].text, "Alpha");
    assert_eq!(headings[0].level, 1);
    assert_eq!(headings[0].line, 1);
    assert_eq!(headings[1].text, "Beta");
    assert_eq!(headings[1].level, 2);
    assert_eq!(headings[1].line, 5);
    assert_eq!(headings[2].text, "Gamma");
    assert_eq!(headings[2].level, 3);
    assert_eq!(headings[2].line, 9);
}

#[test]
fn heading_text_keeps_inline_math() {
    let (_file, context) = context_for("# Area $\\pi r^2$\n");
    let headings = MarkdownToc.generate(&context);

    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].text, "Area $\\pi r^2$");
}

#[test]
fn document_without_headings_yields_empty_outline() {
    let (_file, context) = context_for("just prose\n\nno headings here\n");
    assert!(MarkdownToc.generate(&context).is_empty());
}

#[test]
fn unreadable_document_yields_empty_outline() {
    let context = DocumentContext::new(PathBuf::from("/nonexistent/ghost.md"));
    assert!(MarkdownToc.generate(&context).is_empty());
}

#[test]
fn declares_markdown_capabilities() {
    assert!(MarkdownToc.requires_math_typesetting());
    assert_eq!(
        MarkdownToc.toolbar().map(|toolbar| toolbar.label),
        Some("markdown".to_string())
    );
}
