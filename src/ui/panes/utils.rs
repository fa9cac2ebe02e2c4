//! Shared helpers for pane rendering
//!
//! All functions here are `pub(super)`, visible only within the panes module.

use crate::model::tree::TreeNodeState;
use crate::model::NodeState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the pane title
pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

pub(super) fn node_style(state: NodeState) -> Style {
    match state {
        NodeState::Unvisited => Style::default().fg(DEFAULT_THEME.comment),
        NodeState::Frontier => Style::default().fg(DEFAULT_THEME.frontier),
        NodeState::Done => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
    }
}

pub(super) fn node_label(state: NodeState) -> &'static str {
    match state {
        NodeState::Unvisited => "unvisited",
        NodeState::Frontier => "frontier",
        NodeState::Done => "done",
    }
}

pub(super) fn tree_node_style(state: TreeNodeState) -> Style {
    match state {
        TreeNodeState::Idle => Style::default().fg(DEFAULT_THEME.fg),
        TreeNodeState::Visiting => Style::default()
            .fg(DEFAULT_THEME.compare)
            .add_modifier(Modifier::BOLD),
        TreeNodeState::Found => Style::default()
            .fg(DEFAULT_THEME.pivot)
            .add_modifier(Modifier::BOLD),
        TreeNodeState::Visited => Style::default().fg(DEFAULT_THEME.success),
    }
}
