use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use prayerlog::models::{HistoryDay, PrayerName};

use crate::tui::theme;

const CELL_WIDTH: usize = 3;
const LABEL_WIDTH: usize = 10;

/// Prayers down the side, days across, newest day on the left.
pub fn render(frame: &mut Frame, area: Rect, days: &[HistoryDay]) {
    let block = Block::default()
        .title(Span::styled(" Prayer History ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    if days.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "  Log a prayer to start your history",
            theme::dim(),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let usable = (area.width as usize).saturating_sub(2 + LABEL_WIDTH);
    let visible = (usable / CELL_WIDTH).min(days.len());
    let shown = &days[..visible];

    let mut header = vec![Span::raw(" ".repeat(LABEL_WIDTH))];
    for day in shown {
        // Day of month from "YYYY-MM-DD"
        let dom = day.date.get(8..10).unwrap_or("??");
        header.push(Span::styled(format!("{:<width$}", dom, width = CELL_WIDTH), theme::dim()));
    }

    let mut lines = vec![Line::from(header)];
    for (row, prayer) in PrayerName::ALL.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("  {:<width$}", prayer.display_name(), width = LABEL_WIDTH - 2),
            theme::bold(),
        )];
        for day in shown {
            let (_, status) = day.statuses[row];
            spans.push(Span::styled(
                format!("{:<width$}", "■", width = CELL_WIDTH),
                theme::status(status),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
