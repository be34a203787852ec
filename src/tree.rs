//! The table-of-contents tree view: a presentational component over an outline.
//!
//! The tree consumes a title, an ordered heading list, a per-item renderer and
//! an optional toolbar, and turns them into rows with box-drawing prefixes. It
//! owns only display state: a cursor that survives rebuilds (clamped to the new
//! row count) and navigation over the heading hierarchy by level.

use ratatui::text::Line;

use crate::generator::Toolbar;
use crate::heading::Heading;

/// One rendered entry in the tree.
pub struct TocRow {
    pub heading: Heading,
    /// Box-drawing indentation, kept separate from the rendered content so the
    /// typesetter only ever touches the content spans.
    pub prefix: String,
    /// Rendered heading content (custom renderer output or plain text).
    pub line: Line<'static>,
}

/// Navigable tree committed by the panel and drawn by the shell.
pub struct TocTree {
    pub title: String,
    pub toolbar: Option<Toolbar>,
    rows: Vec<TocRow>,
    cursor: usize,
}

impl TocTree {
    #[must_use]
    pub fn empty(title: &str) -> Self {
        Self {
            title: title.to_string(),
            toolbar: None,
            rows: Vec::new(),
            cursor: 0,
        }
    }

    /// Replaces the tree contents wholesale, preserving the cursor position
    /// where the new outline still covers it.
    pub fn rebuild<F>(&mut self, title: &str, outline: Vec<Heading>, render_item: F, toolbar: Option<Toolbar>)
    where
        F: Fn(&Heading) -> Line<'static>,
    {
        self.title = title.to_string();
        self.toolbar = toolbar;
        self.rows = build_rows(outline, render_item);
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    #[must_use]
    pub fn rows(&self) -> &[TocRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [TocRow] {
        &mut self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn selected(&self) -> Option<&TocRow> {
        self.rows.get(self.cursor)
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Moves to the nearest preceding heading at a shallower level.
    pub fn select_parent(&mut self) -> bool {
        let Some(current) = self.rows.get(self.cursor) else {
            return false;
        };
        let level = current.heading.level;
        for i in (0..self.cursor).rev() {
            if self.rows[i].heading.level < level {
                self.cursor = i;
                return true;
            }
        }
        false
    }

    /// Moves to the next heading at the same level, stopping at the end of the
    /// enclosing section.
    pub fn select_next_sibling(&mut self) -> bool {
        let Some(current) = self.rows.get(self.cursor) else {
            return false;
        };
        let level = current.heading.level;
        for i in (self.cursor + 1)..self.rows.len() {
            if self.rows[i].heading.level == level {
                self.cursor = i;
                return true;
            }
            if self.rows[i].heading.level < level {
                break;
            }
        }
        false
    }

    /// Moves to the previous heading at the same level, stopping at the start
    /// of the enclosing section.
    pub fn select_prev_sibling(&mut self) -> bool {
        let Some(current) = self.rows.get(self.cursor) else {
            return false;
        };
        let level = current.heading.level;
        for i in (0..self.cursor).rev() {
            if self.rows[i].heading.level == level {
                self.cursor = i;
                return true;
            }
            if self.rows[i].heading.level < level {
                break;
            }
        }
        false
    }
}

fn build_rows<F>(outline: Vec<Heading>, render_item: F) -> Vec<TocRow>
where
    F: Fn(&Heading) -> Line<'static>,
{
    let depths: Vec<usize> = outline.iter().map(|h| h.level.saturating_sub(1)).collect();

    // A row is last at its depth when no later row shares it before the
    // outline climbs back out of the enclosing section.
    let mut last_at_depth = vec![true; outline.len()];
    for i in 0..outline.len() {
        for j in (i + 1)..outline.len() {
            if depths[j] < depths[i] {
                break;
            }
            if depths[j] == depths[i] {
                last_at_depth[i] = false;
                break;
            }
        }
    }

    // not_last[d] records whether the most recent row at depth d still has
    // siblings coming, which decides the vertical bars under it.
    let mut not_last: Vec<bool> = Vec::new();
    let mut rows = Vec::with_capacity(outline.len());
    for (i, heading) in outline.into_iter().enumerate() {
        let depth = depths[i];
        if not_last.len() <= depth {
            not_last.resize(depth + 1, false);
        }
        let prefix = tree_prefix(depth, last_at_depth[i], &not_last);
        not_last[depth] = !last_at_depth[i];

        let line = render_item(&heading);
        rows.push(TocRow {
            heading,
            prefix,
            line,
        });
    }
    rows
}

/// Generate the box-drawing prefix for one row of the tree.
fn tree_prefix(depth: usize, is_last: bool, not_last: &[bool]) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut prefix = String::new();
    for ancestor in 1..depth {
        if not_last.get(ancestor).copied().unwrap_or(false) {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    if is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
