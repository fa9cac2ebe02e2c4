//! Binary tree drawn as an indented outline

use super::utils::{pane_block, tree_node_style};
use crate::automaton::TreeView;
use crate::model::tree::TreeNodeState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

pub fn render_tree_pane(frame: &mut Frame, area: Rect, title: &str, view: &TreeView) {
    let block = pane_block(title, true).padding(Padding::new(1, 1, 0, 0));
    let mut lines = Vec::new();

    if view.tree.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty tree)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    for (id, depth) in view.tree.depths() {
        let node = view.tree.node(id);
        let marker = if view.current == Some(id) { "▶ " } else { "  " };
        let tag = match node.state {
            TreeNodeState::Idle => "",
            TreeNodeState::Visiting => "  visiting",
            TreeNodeState::Found => "  found",
            TreeNodeState::Visited => "  visited",
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(DEFAULT_THEME.border_focused)),
            Span::styled("│  ".repeat(depth), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(node.value.to_string(), tree_node_style(node.state)),
            Span::styled(tag, Style::default().fg(DEFAULT_THEME.comment)),
        ]));
    }

    let trail = if view.trail.is_empty() {
        "-".to_string()
    } else {
        view.trail
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" → ")
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "path  ",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(trail, Style::default().fg(DEFAULT_THEME.fg)),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
