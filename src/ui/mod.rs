mod detail;
mod genres;
mod help;
mod list;

use crate::app::{App, View};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    match app.view {
        View::List => list::render(app, frame),
        View::Detail => detail::render(app, frame),
        View::Genres => {
            // Picker floats over the list
            list::render(app, frame);
            genres::render(app, frame);
        }
    }

    // Render help overlay on top if active
    if app.show_help {
        help::render(frame);
    }
}

/// Key hint span pair for status bars: bold key, plain label.
fn key_hint<'a>(key: &'a str, label: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(label),
    ]
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut result = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}

/// Create a centered rectangle using percentage of parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
