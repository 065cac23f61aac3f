use prayerlog::models::PrayerStatus;

/// Percentage rounded for display, e.g. "67%".
pub fn format_percent(pct: f64) -> String {
    format!("{:.0}%", pct)
}

/// Single-cell glyph for a status, shared by the CLI grid and the dashboard.
pub fn status_glyph(status: PrayerStatus) -> &'static str {
    match status {
        PrayerStatus::InCongregation => "●",
        PrayerStatus::Alone => "◑",
        PrayerStatus::Late => "◔",
        PrayerStatus::NotPrayed => "○",
    }
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Split `width` cells between segments in proportion to their percentages.
///
/// Every non-zero segment gets at least one cell and the widths always sum to `width`.
pub fn segment_widths(percentages: &[f64], width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = percentages
        .iter()
        .map(|p| {
            if *p > 0.0 {
                ((p / 100.0) * width as f64).round().max(1.0) as usize
            } else {
                0
            }
        })
        .collect();

    let used: usize = widths.iter().sum();
    if used == 0 {
        return widths;
    }
    // Push the rounding error onto the widest segment
    if let Some(widest) = (0..widths.len()).max_by_key(|i| widths[*i]) {
        if used > width {
            widths[widest] = widths[widest].saturating_sub(used - width);
        } else {
            widths[widest] += width - used;
        }
    }
    widths
}
