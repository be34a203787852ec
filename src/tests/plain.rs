use super::PlainToc;
use crate::document::DocumentContext;
use crate::generator::Generator;
use crate::heading::Heading;
use std::io::Write;
use tempfile::NamedTempFile;

fn outline_of(content: &str) -> Vec<Heading> {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    let context = DocumentContext::new(file.path().to_path_buf());
    PlainToc.generate(&context)
}

#[test]
fn underlined_headings_with_levels_and_lines() {
    let headings = outline_of(
        "Title\n=====\n\nIntro text\n\nDetails\n-------\n\nshort\n--\n",
    );

    assert_eq!(headings.len(), 2);
    assert_eq!(headings[0].text, "Title");
    assert_eq!(headings[0].level, 1);
    assert_eq!(headings[0].line, 1);
    assert_eq!(headings[1].text, "Details");
    assert_eq!(headings[1].level, 2);
    assert_eq!(headings[1].line, 6);
}

#[test]
fn rules_shorter_than_three_characters_are_ignored() {
    assert!(outline_of("short\n--\n").is_empty());
}

#[test]
fn blank_lines_are_never_headings() {
    assert!(outline_of("\n=====\n\ntext\n").is_empty());
}

#[test]
fn implements_no_optional_capabilities() {
    assert!(PlainToc.toolbar().is_none());
    assert!(!PlainToc.requires_math_typesetting());
    let heading = Heading {
        text: "Title".to_string(),
        level: 1,
        line: 1,
    };
    assert!(PlainToc.render_item(&heading).is_none());
}
