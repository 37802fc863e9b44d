use super::key_hint;
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let card = match &app.detail {
        Some(c) => c,
        None => return,
    };

    // Layout: content(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let field = |name: &'static str, text: &str, style: Style| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!(" {:<11}", name), label),
            Span::styled(text.to_string(), style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", card.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Duration", &card.duration, Style::default().fg(Color::Yellow)),
        field("Released", &card.release_date, value),
        field("Director", &card.director, value),
        field("Cast", &card.cast, value),
        field("Genres", &card.genres, Style::default().fg(Color::Magenta)),
        field("Country", &card.nationality, value),
        field("Poster", &card.poster, value),
        field(
            "IMDb",
            &card.link,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ];

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Movie Detail ")
                .title_bottom(
                    Line::from(format!(" scroll: {} ", app.detail_scroll))
                        .alignment(Alignment::Right),
                ),
        );
    frame.render_widget(content, chunks[0]);

    // ── Status bar ──
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in [
        ("↑↓", " Scroll  "),
        ("y", " Yank Link  "),
        ("o", " Open Link  "),
        ("Esc", " Back  "),
    ] {
        spans.extend(key_hint(key, label));
    }
    spans.push(Span::styled(&app.status_msg, label));
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}
