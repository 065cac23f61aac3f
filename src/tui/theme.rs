use ratatui::style::{Color, Modifier, Style};

use prayerlog::models::PrayerStatus;

pub const BG: Color = Color::Rgb(15, 23, 42);
pub const SURFACE: Color = Color::Rgb(30, 41, 59);
pub const BORDER: Color = Color::Rgb(51, 65, 85);
pub const TEXT: Color = Color::Rgb(241, 245, 249);
pub const TEXT_DIM: Color = Color::Rgb(148, 163, 184);
pub const ACCENT: Color = Color::Rgb(56, 189, 248);

// Status colours
pub const JAMAAH: Color = Color::Rgb(34, 197, 94);
pub const ALONE: Color = Color::Rgb(234, 179, 8);
pub const LATE: Color = Color::Rgb(239, 68, 68);
pub const NOT_PRAYED: Color = Color::Rgb(100, 116, 139);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(LATE)
}

pub fn status_color(status: PrayerStatus) -> Color {
    match status {
        PrayerStatus::InCongregation => JAMAAH,
        PrayerStatus::Alone => ALONE,
        PrayerStatus::Late => LATE,
        PrayerStatus::NotPrayed => NOT_PRAYED,
    }
}

pub fn status(status: PrayerStatus) -> Style {
    Style::default().fg(status_color(status))
}
