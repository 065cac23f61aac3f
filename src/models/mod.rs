pub mod log;
pub mod prayer;
pub mod stats;

pub use log::{parse_date, DateKey, PrayerLog};
pub use prayer::{resolve_status, DailyRecord, PrayerName, PrayerStatus};
pub use stats::{empty_counts, DayProgress, HistoryDay, StatusCounts, Streak, Summary, Tally};
