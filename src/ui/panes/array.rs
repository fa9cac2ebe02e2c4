//! Sorting array as a bar chart

use super::utils::pane_block;
use crate::automaton::{ArrayView, Mark};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};

fn bar_color(view: &ArrayView, index: usize) -> Color {
    match view.mark_at(index) {
        Some(Mark::Compare) => DEFAULT_THEME.compare,
        Some(Mark::Pivot) => DEFAULT_THEME.pivot,
        Some(Mark::Cursor) => DEFAULT_THEME.secondary,
        None if view.sorted.contains(&index) => DEFAULT_THEME.success,
        None if view.window.as_ref().is_some_and(|w| w.contains(&index)) => DEFAULT_THEME.frontier,
        None => DEFAULT_THEME.bar,
    }
}

/// Render the bars plus a counter line
pub fn render_array_pane(frame: &mut Frame, area: Rect, title: &str, view: &ArrayView) {
    let block = pane_block(title, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let count = view.values.len().max(1) as u16;
    // Widest bars that still fit, with a gap when there is room for one
    let slot = (rows[0].width / count).max(1);
    let (bar_width, bar_gap) = if slot >= 3 { (slot - 1, 1) } else { (slot, 0) };

    let bars: Vec<Bar> = view
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let text = if bar_width >= 3 { value.to_string() } else { String::new() };
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(text)
                .style(Style::default().fg(bar_color(view, index)))
        })
        .collect();

    let max = view.values.iter().copied().max().unwrap_or(0).max(1) as u64;
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max);
    frame.render_widget(chart, rows[0]);

    let stats = view.stats;
    let counters = Line::from(vec![
        Span::styled(" comparisons ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(stats.comparisons.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("   swaps ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(stats.swaps.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("   writes ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(stats.writes.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("   n ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(view.values.len().to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(Paragraph::new(counters), rows[1]);
}
