//! Status bar rendering with keybindings and run state indicators

use crate::ui::app::Screen;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows, borrowed from the app
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub screen: Screen,
    /// Steps taken by the open automaton, if any
    pub steps: Option<usize>,
    pub is_running: bool,
    pub is_done: bool,
}

fn key_hints(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Menu => &[(" ↑/↓ ", " select "), (" ↵ ", " open "), ("q", " quit ")],
        Screen::BstInput => &[
            (" 0-9 ", " value "),
            (" i/s/d ", " run "),
            (" esc ", " back "),
        ],
        Screen::Visualize => &[
            (" ⎵ ", " play "),
            (" n/→ ", " step "),
            (" r ", " reset "),
            (" esc ", " menu "),
            ("q", " quit "),
        ],
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: step counter and message
    let step_text = match data.steps {
        Some(steps) => format!(" Step {} ", steps),
        None => " algostep ".to_string(),
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.is_done {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in key_hints(data.screen).iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    if data.screen == Screen::Visualize {
        let (label, bg) = if data.is_done {
            (" DONE ", DEFAULT_THEME.success)
        } else if data.is_running {
            (" ▶ RUNNING ", DEFAULT_THEME.secondary)
        } else {
            (" PAUSED ", DEFAULT_THEME.error)
        };
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
