use chrono::NaiveDate;

use crate::models::{DateKey, HistoryDay, PrayerLog};

/// Grid bound when the config does not say otherwise: five years of days.
pub const DEFAULT_MAX_DAYS: u32 = 365 * 5;

/// Every day from the first logged date up to `today`, newest first.
///
/// Days without an entry still appear, with all five prayers not prayed. At most
/// `max_days` days are produced, counted from `today` backwards.
pub fn history(log: &PrayerLog, today: NaiveDate, max_days: u32) -> Vec<HistoryDay> {
    let Some(start) = log.earliest_date() else {
        return Vec::new();
    };

    let mut days = Vec::new();
    let mut date = today;
    while date >= start && (days.len() as u32) < max_days {
        let key = DateKey::from_date(date);
        let record = log.record_or_default(&key);
        days.push(HistoryDay {
            date: key.to_string(),
            statuses: record.resolved(),
        });
        match date.pred_opt() {
            Some(prev) => date = prev,
            None => break,
        }
    }
    days
}
