use super::centered_rect;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn binding<'a>(keys: &'a str, what: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {:<10}", keys), Style::default().fg(Color::Yellow)),
        Span::raw(what),
    ])
}

pub fn render(frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from(""),
        section("Global"),
        binding("?", "Toggle this help"),
        binding("q", "Quit application"),
        binding("Esc", "Back / cancel"),
        Line::from(""),
        section("List View"),
        binding("↑/k ↓/j", "Navigate up/down"),
        binding("PgUp/PgDn", "Previous/next page"),
        binding("g/G", "Jump to first/last page"),
        binding("f", "Pick a genre to filter by"),
        binding("t", "Order displayed movies by title"),
        binding("d", "Order displayed movies by release date"),
        binding("a", "Show all movies"),
        binding("Enter", "Open movie detail"),
        binding("y", "Copy IMDb link to clipboard"),
        binding("o", "Open IMDb link in the browser"),
        Line::from(""),
        section("Detail View"),
        binding("↑/↓", "Scroll content"),
        binding("y/o", "Copy/open IMDb link"),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help — Keybindings ")
                .title_bottom(Line::from(" Press any key to close ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}
