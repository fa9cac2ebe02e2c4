//! Value entry for the BST operation

use super::utils::pane_block;
use crate::catalog::presets::BST_INSERTIONS;
use crate::tree::BstOperation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str, operation: BstOperation) {
    let block = pane_block("Binary Search Tree", true).padding(Padding::new(2, 2, 1, 0));

    let tree_values = BST_INSERTIONS
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let lines = vec![
        Line::from(Span::styled(
            format!("Tree built from: {}", tree_values),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Value: ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                format!("{}▏", input),
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" i ", Style::default().bg(DEFAULT_THEME.comment)),
            Span::raw(" insert   "),
            Span::styled(" s ", Style::default().bg(DEFAULT_THEME.comment)),
            Span::raw(" search   "),
            Span::styled(" d ", Style::default().bg(DEFAULT_THEME.comment)),
            Span::raw(" delete   "),
            Span::styled(" ↵ ", Style::default().bg(DEFAULT_THEME.comment)),
            Span::raw(format!(" {} ", operation)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
