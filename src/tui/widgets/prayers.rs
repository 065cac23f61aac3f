use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use prayerlog::models::DailyRecord;

use crate::tui::theme;
use crate::utils::format::status_glyph;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    record: &DailyRecord,
    focused_idx: usize,
    can_go_forward: bool,
) {
    let nav = if can_go_forward { " ‹ prev · next › " } else { " ‹ prev " };
    let block = Block::default()
        .title(Span::styled(" Daily Tracker ", theme::accent()))
        .title_bottom(Line::from(Span::styled(nav, theme::dim())))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let items: Vec<ListItem> = record
        .resolved()
        .iter()
        .enumerate()
        .map(|(i, (prayer, status))| {
            let is_focused = i == focused_idx;

            let name_style = if is_focused {
                theme::accent().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let marker = if is_focused { "▸ " } else { "  " };

            let line = Line::from(vec![
                Span::styled(marker, theme::accent()),
                Span::styled(format!("{:<8}", prayer.display_name()), name_style),
                Span::styled(format!("{:<11}", prayer.period()), theme::dim()),
                Span::styled(status_glyph(*status), theme::status(*status)),
                Span::styled(format!("  {}", status.display_name()), theme::status(*status)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
