use super::centered_rect;
use crate::app::App;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

/// Genre picker popup over the list.
pub fn render(app: &App, frame: &mut Frame) {
    let area = centered_rect(40, 60, frame.area());
    frame.render_widget(Clear, area);

    let active = app.catalog.active_genre().map(str::to_lowercase);
    let items: Vec<ListItem> = app
        .genres
        .iter()
        .map(|genre| {
            let marker = if active.as_deref() == Some(genre.to_lowercase().as_str()) {
                "● "
            } else {
                "  "
            };
            ListItem::new(format!("{}{}", marker, genre))
        })
        .collect();

    let picker = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Genre ")
                .title_bottom(
                    Line::from(" Enter select · Esc cancel ")
                        .style(Style::default().fg(Color::DarkGray)),
                ),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(app.genre_selected));
    frame.render_stateful_widget(picker, area, &mut state);
}
