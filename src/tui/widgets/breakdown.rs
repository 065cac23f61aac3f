use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use prayerlog::models::{PrayerStatus, Tally};

use crate::tui::theme;
use crate::utils::format::{format_percent, segment_widths, status_glyph};

/// Overall legend plus one stacked bar per prayer.
pub fn render(frame: &mut Frame, area: Rect, tally: &Tally) {
    let block = Block::default()
        .title(Span::styled(" All-Time Progress ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    if tally.total_slots() == 0 {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("  No prayers logged yet", theme::dim())),
        ])
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let mut lines = vec![Line::from("")];

    let overall = tally.overall_percentages();
    for status in PrayerStatus::DISPLAY_ORDER {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", status_glyph(status)), theme::status(status)),
            Span::styled(format!("{:<12}", status.display_name()), theme::bold()),
            Span::styled(format!("{:>4}", format_percent(overall[&status])), theme::dim()),
        ]));
    }
    lines.push(Line::from(""));

    // "  Maghrib  " label plus borders
    let bar_width = (area.width as usize).saturating_sub(14).max(5);
    for (prayer, pct) in tally.per_prayer_percentages() {
        let shares: Vec<f64> = PrayerStatus::DISPLAY_ORDER
            .iter()
            .map(|s| pct[s])
            .collect();
        let widths = segment_widths(&shares, bar_width);

        let mut spans = vec![Span::styled(
            format!("  {:<9}", prayer.display_name()),
            theme::bold(),
        )];
        for (status, width) in PrayerStatus::DISPLAY_ORDER.iter().zip(widths) {
            if width > 0 {
                spans.push(Span::styled("█".repeat(width), theme::status(*status)));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
