use super::TocTree;
use crate::heading::Heading;
use ratatui::text::Line;

fn heading(text: &str, level: usize, line: usize) -> Heading {
    Heading {
        text: text.to_string(),
        level,
        line,
    }
}

fn plain(h: &Heading) -> Line<'static> {
    Line::from(h.text.clone())
}

fn build(outline: Vec<Heading>) -> TocTree {
    let mut tree = TocTree::empty("t");
    tree.rebuild("t", outline, plain, None);
    tree
}

fn sample() -> TocTree {
    build(vec![
        heading("A", 1, 1),
        heading("B", 2, 3),
        heading("C", 3, 5),
        heading("D", 2, 7),
        heading("E", 1, 9),
    ])
}

#[test]
fn box_drawing_prefixes_follow_the_hierarchy() {
    let tree = sample();
    let prefixes: Vec<&str> = tree.rows().iter().map(|row| row.prefix.as_str()).collect();
    assert_eq!(prefixes, vec!["", "├── ", "│   └── ", "└── ", ""]);
}

#[test]
fn cursor_survives_rebuild_and_clamps() {
    let mut tree = sample();
    tree.select_last();
    assert_eq!(tree.cursor(), 4);

    tree.rebuild(
        "t",
        vec![heading("A", 1, 1), heading("B", 2, 3)],
        plain,
        None,
    );
    assert_eq!(tree.cursor(), 1, "cursor clamps to the shorter outline");

    tree.rebuild("t", Vec::new(), plain, None);
    assert_eq!(tree.cursor(), 0);
    assert!(tree.selected().is_none());
}

#[test]
fn parent_navigation_climbs_levels() {
    let mut tree = sample();
    tree.select_next();
    tree.select_next();
    assert_eq!(tree.selected().unwrap().heading.text, "C");

    assert!(tree.select_parent());
    assert_eq!(tree.selected().unwrap().heading.text, "B");

    assert!(tree.select_parent());
    assert_eq!(tree.selected().unwrap().heading.text, "A");

    assert!(!tree.select_parent(), "top-level heading has no parent");
}

#[test]
fn sibling_navigation_stays_inside_the_section() {
    let mut tree = sample();
    tree.select_next();
    assert_eq!(tree.selected().unwrap().heading.text, "B");

    assert!(tree.select_next_sibling());
    assert_eq!(tree.selected().unwrap().heading.text, "D");

    assert!(tree.select_prev_sibling());
    assert_eq!(tree.selected().unwrap().heading.text, "B");

    // D is the last level-2 heading under A; E belongs to another section.
    tree.select_next_sibling();
    assert!(
        !tree.select_next_sibling(),
        "sibling search stops at the end of the enclosing section"
    );
}

#[test]
fn first_and_last_jumps() {
    let mut tree = sample();
    tree.select_last();
    assert_eq!(tree.selected().unwrap().heading.text, "E");
    tree.select_first();
    assert_eq!(tree.selected().unwrap().heading.text, "A");
}
