use super::{key_hint, truncate_str};
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Layout: header(2) + list(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    // ── Header ──
    let genre = app.catalog.active_genre().unwrap_or("all genres");
    let order = app
        .catalog
        .sort_order()
        .map(|o| format!("   sorted by {}", o.label()))
        .unwrap_or_default();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Movie Catalog",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   [{}]   {}{}", app.display.len(), genre, order),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Left)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, chunks[0]);

    // ── List ──
    let title_width = (area.width as usize).saturating_sub(40).max(10);
    let items: Vec<ListItem> = app
        .visible_cards()
        .iter()
        .map(|card| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", card.release_date),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:>6} ", card.duration),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!(
                    "{:<width$}",
                    truncate_str(&card.title, title_width),
                    width = title_width
                )),
                Span::styled(
                    format!("  {}", card.genres),
                    Style::default().fg(Color::Magenta),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let page_info = format!(
        " {}-{} of {} ",
        if app.display.is_empty() { 0 } else { app.list_offset + 1 },
        app.list_offset + app.visible_cards().len(),
        app.display.len()
    );

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Movies ")
                .title_bottom(Line::from(page_info).alignment(Alignment::Right)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if !app.display.is_empty() {
        list_state.select(Some(app.list_selected));
    }
    frame.render_stateful_widget(list_widget, chunks[1], &mut list_state);

    if app.display.is_empty() {
        let empty = Paragraph::new(" No movie matches this genre. Press a to show all.")
            .style(Style::default().fg(Color::DarkGray));
        let inner = chunks[1].inner(ratatui::layout::Margin::new(1, 1));
        frame.render_widget(empty, inner);
    }

    // ── Status bar ──
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in [
        ("↑↓", " Navigate  "),
        ("f", " Genre  "),
        ("t", " Title  "),
        ("d", " Date  "),
        ("a", " All  "),
        ("Enter", " Detail  "),
        ("?", " Help  "),
        ("q", " Quit  "),
    ] {
        spans.extend(key_hint(key, label));
    }
    spans.push(Span::styled(
        &app.status_msg,
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);
}
