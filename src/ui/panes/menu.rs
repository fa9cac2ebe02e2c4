//! Algorithm menu

use super::utils::pane_block;
use crate::catalog::{AlgorithmKind, Category};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Padding},
    Frame,
};

/// Render the menu with a header line before each category
pub fn render_menu_pane(frame: &mut Frame, area: Rect, kinds: &[AlgorithmKind], selected: usize) {
    let block = pane_block("algostep", true).padding(Padding::new(1, 1, 0, 0));

    let mut items = Vec::new();
    let mut category: Option<Category> = None;
    // Row of the selected entry, counting header and spacer rows
    let mut selected_row = 0;
    for (index, kind) in kinds.iter().enumerate() {
        if category != Some(kind.category()) {
            category = Some(kind.category());
            if index > 0 {
                items.push(ListItem::new(""));
            }
            items.push(ListItem::new(Line::from(Span::styled(
                kind.category().title(),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ))));
        }

        let line = if index == selected {
            selected_row = items.len();
            Line::from(vec![
                Span::styled(" ▶ ", Style::default().fg(DEFAULT_THEME.border_focused)),
                Span::styled(
                    kind.title(),
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(vec![
                Span::raw("   "),
                Span::styled(kind.title(), Style::default().fg(DEFAULT_THEME.fg)),
            ])
        };
        items.push(ListItem::new(line));
    }

    let mut state = ListState::default().with_selected(Some(selected_row));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}
