//! Pure aggregation over a [`PrayerLog`](crate::models::PrayerLog) snapshot.
//!
//! Nothing here does I/O or keeps state between calls; every statistic is derived
//! again from the full log whenever it changes.

mod history;
mod streak;
mod tally;

pub use history::{history, DEFAULT_MAX_DAYS};
pub use streak::{best_streak, current_streak, streak};
pub use tally::{day_progress, percentages, tally};

use chrono::NaiveDate;

use crate::models::{DateKey, PrayerLog, Summary};

/// Everything the dashboard shows about a log, as of `today`.
pub fn summarize(log: &PrayerLog, today: NaiveDate) -> Summary {
    Summary {
        streak: streak(log, today),
        tally: tally(log),
        today: day_progress(&log.record_or_default(&DateKey::from_date(today))),
    }
}
