//! Distance matrix for Floyd-Warshall

use super::utils::pane_block;
use crate::automaton::MatrixView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

/// Render the matrix; the cell under the cursor is highlighted, and row/column
/// `k` (the intermediate node) is tinted
pub fn render_matrix_pane(frame: &mut Frame, area: Rect, title: &str, view: &MatrixView) {
    let n = view.dist.len();
    let header_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);

    let header = Row::new(
        std::iter::once(Cell::from("")).chain((0..n).map(|j| Cell::from(j.to_string()).style(header_style))),
    );

    let rows = view.dist.iter().enumerate().map(|(i, row)| {
        let cells = row.iter().enumerate().map(|(j, d)| {
            let style = match view.cursor {
                Some((_, ci, cj)) if (ci, cj) == (i, j) => Style::default()
                    .fg(DEFAULT_THEME.compare)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD),
                Some((k, _, _)) if k == i || k == j => Style::default().fg(DEFAULT_THEME.frontier),
                _ if d.is_finite() => Style::default().fg(DEFAULT_THEME.fg),
                _ => Style::default().fg(DEFAULT_THEME.comment),
            };
            Cell::from(d.to_string()).style(style)
        });
        Row::new(std::iter::once(Cell::from(i.to_string()).style(header_style)).chain(cells))
    });

    let widths = std::iter::repeat(Constraint::Length(6)).take(n + 1);
    let title = match view.cursor {
        Some((k, i, j)) => format!("{}  k={} i={} j={}", title, k, i, j),
        None => title.to_string(),
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(pane_block(&title, true));
    frame.render_widget(table, area);
}
