//! The UI renders the shell state into something visible and navigable.
//!
//! The layout is a single tree pane over a help/status bar. The tree pane draws
//! whatever the panel last committed: title (plus toolbar label and document
//! position), rows with their box-drawing prefixes, and a reversed cursor line.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app_state::AppState;

/// Renders the table-of-contents tree and the help bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let tree = app.panel.tree();

    let items: Vec<ListItem> = tree
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(row.prefix.clone())];
            spans.extend(row.line.spans.iter().cloned());

            let style = if i == tree.cursor() {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let mut title = match &tree.toolbar {
        Some(toolbar) => format!("{} [{}]", tree.title, toolbar.label),
        None => tree.title.clone(),
    };
    if app.documents.len() > 1 {
        title = format!("{title} ({}/{})", app.active + 1, app.documents.len());
    }

    if tree.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            "(no headings)",
            Style::default().fg(Color::DarkGray),
        ))
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(placeholder, chunks[0]);
    } else {
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(list, chunks[0]);
    }

    let help_text = app.message.clone().unwrap_or_else(|| {
        "↑/↓: Navigate | ←: Parent | Shift+↑/↓: Siblings | Tab: Next file | Enter: Locate | r: Refresh | q: Quit"
            .to_string()
    });
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
