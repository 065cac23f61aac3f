use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, username: &str, viewing: NaiveDate, is_today: bool) {
    let title_line = Line::from(vec![
        Span::styled("Prayer Tracker", theme::accent().add_modifier(Modifier::BOLD)),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(format!("Welcome, {}!", username), theme::dim()),
    ]);

    let mut date_spans = vec![Span::styled(
        viewing.format("%A, %b %d, %Y").to_string(),
        theme::bold(),
    )];
    if is_today {
        date_spans.push(Span::styled("  (today)", theme::accent()));
    }

    let text = vec![title_line, Line::from(date_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::accent())
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
