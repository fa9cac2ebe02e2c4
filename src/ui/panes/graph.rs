//! Graph state as two lists: nodes on the left, edges on the right

use super::utils::{node_label, node_style, pane_block};
use crate::automaton::{EdgeMark, GraphView};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

fn id_list(ids: &[usize]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" ")
    }
}

fn edge_line<'a>(view: &GraphView<'a>, index: usize) -> Line<'a> {
    let edge = view.graph.edges()[index];
    let arrow = if view.graph.is_directed() { "→" } else { "─" };
    let is_active = view.active_edge.is_some_and(|(a, b)| {
        (a, b) == (edge.from, edge.to) || (!view.graph.is_directed() && (b, a) == (edge.from, edge.to))
    });

    let (tag, style) = match view.edge_marks.get(index).copied().unwrap_or_default() {
        EdgeMark::Untested => ("", Style::default().fg(DEFAULT_THEME.fg)),
        EdgeMark::Testing => ("testing", Style::default().fg(DEFAULT_THEME.compare)),
        EdgeMark::Included => (
            "in tree",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
        EdgeMark::Rejected => ("rejected", Style::default().fg(DEFAULT_THEME.error)),
    };
    let style = if is_active {
        style.bg(DEFAULT_THEME.current_line_bg)
    } else {
        style
    };

    Line::from(vec![
        Span::styled(
            format!("{:>2} {} {:<2} w={:<3} ", edge.from, arrow, edge.to, edge.weight),
            style,
        ),
        Span::styled(tag, style),
    ])
}

pub fn render_graph_pane(frame: &mut Frame, area: Rect, title: &str, view: &GraphView) {
    let block = pane_block(title, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    // Left column: one line per node, then the order and frontier
    let mut lines = vec![Line::from(Span::styled(
        "node  state       dist",
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    ))];
    for (node, &state) in view.states.iter().enumerate() {
        let dist = view
            .distances
            .map(|d| d[node].to_string())
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("{:>4}  {:<10}  {}", node, node_label(state), dist),
            node_style(state),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("order    ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(id_list(view.order), Style::default().fg(DEFAULT_THEME.success)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("frontier ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(id_list(&view.frontier), Style::default().fg(DEFAULT_THEME.frontier)),
    ]));
    if let Some(weight) = view.mst_weight {
        lines.push(Line::from(vec![
            Span::styled("mst      ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(weight.to_string(), Style::default().fg(DEFAULT_THEME.pivot)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).block(ratatui::widgets::Block::default().padding(Padding::new(1, 1, 0, 0))),
        columns[0],
    );

    // Right column: edges in insertion order
    let mut edges = vec![Line::from(Span::styled(
        "edges",
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    ))];
    edges.extend((0..view.graph.edges().len()).map(|index| edge_line(view, index)));
    frame.render_widget(Paragraph::new(edges), columns[1]);
}
