use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(msg) = notice {
        let paragraph = Paragraph::new(Line::from(Span::styled(format!("✗ {}", msg), theme::warning())))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let hints = [
        ("[↑↓]", " select  "),
        ("[1-4]", " set  "),
        ("[Enter]", " cycle  "),
        ("[←→]", " day  "),
        ("[t]", " today  "),
        ("[?]", " help  "),
        ("[Esc]", " quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, theme::accent()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
