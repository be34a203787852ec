use super::{typeset_str, Typesetter, UnicodeTypesetter};
use crate::heading::Heading;
use crate::tree::TocTree;
use ratatui::text::Line;

#[test]
fn converts_known_commands_and_strips_delimiters() {
    assert_eq!(typeset_str("Area: $\\pi r^2$"), "Area: π r^2");
    assert_eq!(typeset_str("$\\sum x \\to \\infty$"), "∑ x → ∞");
}

#[test]
fn longer_commands_are_not_clipped_by_shorter_ones() {
    assert_eq!(typeset_str("$a \\leq b$"), "a ≤ b");
    assert_eq!(typeset_str("$a \\le b$"), "a ≤ b");
}

#[test]
fn multiple_runs_in_one_line() {
    assert_eq!(typeset_str("$\\alpha$ and $\\beta$"), "α and β");
}

#[test]
fn unbalanced_delimiter_passes_through() {
    assert_eq!(typeset_str("costs $5"), "costs $5");
    assert_eq!(typeset_str("plain text"), "plain text");
}

#[test]
fn unknown_commands_survive_inside_a_run() {
    assert_eq!(typeset_str("$\\alpha \\mystery$"), "α \\mystery");
}

#[test]
fn tree_pass_rewrites_content_but_not_prefixes() {
    let mut tree = TocTree::empty("t");
    tree.rebuild(
        "t",
        vec![
            Heading {
                text: "Overview".to_string(),
                level: 1,
                line: 1,
            },
            Heading {
                text: "Sum $\\sum x$".to_string(),
                level: 2,
                line: 3,
            },
        ],
        |h| Line::from(h.text.clone()),
        None,
    );

    UnicodeTypesetter.typeset(&mut tree);

    let text = |i: usize| -> String {
        tree.rows()[i]
            .line
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    };
    assert_eq!(text(0), "Overview");
    assert_eq!(text(1), "Sum ∑ x");
    assert_eq!(tree.rows()[1].prefix, "└── ");
}
