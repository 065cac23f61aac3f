use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use prayerlog::models::{PrayerStatus, Summary};

use crate::tui::theme;
use crate::utils::format::{format_percent, progress_bar};

pub fn render(frame: &mut Frame, area: Rect, summary: &Summary) {
    let block = Block::default()
        .title(Span::styled(" Summary ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let today = &summary.today;
    let bar = progress_bar(today.completed, today.total, 15);

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Streak       ", theme::dim()),
            Span::styled(
                format!("{} days", summary.streak.current),
                theme::status(PrayerStatus::InCongregation).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  (best {})", summary.streak.best), theme::dim()),
        ]),
        Line::from(vec![
            Span::styled("  Total prayed ", theme::dim()),
            Span::styled(format!("{}", summary.tally.total_non_empty), theme::bold()),
            Span::styled(
                format!("  over {} days", summary.tally.days_logged()),
                theme::dim(),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Today        ", theme::dim()),
            Span::styled(bar, theme::accent()),
            Span::styled(
                format!(
                    "  {}/{} · {}",
                    today.completed,
                    today.total,
                    format_percent(today.percent)
                ),
                theme::dim(),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
