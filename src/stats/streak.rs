use chrono::NaiveDate;

use crate::models::{DateKey, PrayerLog, Streak};

/// Consecutive satisfied days ending at `reference`.
///
/// An unsatisfied `reference` day does not break the streak: counting starts from the
/// day before instead, so a streak survives until the day is over. The walk stops at the
/// first unsatisfied day, and a missing day is unsatisfied, so it always terminates.
pub fn current_streak(log: &PrayerLog, reference: NaiveDate) -> u32 {
    let mut day = reference;
    if !log.is_satisfied(&DateKey::from_date(day)) {
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => return 0,
        }
    }

    let mut streak = 0u32;
    while log.is_satisfied(&DateKey::from_date(day)) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Longest run of consecutive satisfied days anywhere in the log.
pub fn best_streak(log: &PrayerLog) -> u32 {
    let dates: Vec<NaiveDate> = log
        .days()
        .filter(|(_, record)| record.is_satisfied())
        .filter_map(|(key, _)| key.date())
        .collect();

    // BTreeMap iteration keeps zero-padded date keys in calendar order
    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for date in dates {
        run = match prev {
            Some(p) if p.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(date);
    }
    best
}

pub fn streak(log: &PrayerLog, reference: NaiveDate) -> Streak {
    Streak {
        current: current_streak(log, reference),
        best: best_streak(log),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrayerName, PrayerStatus};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn pray(log: PrayerLog, date: NaiveDate) -> PrayerLog {
        log.with_status(&DateKey::from(date), PrayerName::Dhuhr, PrayerStatus::Alone)
    }

    fn skip(log: PrayerLog, date: NaiveDate) -> PrayerLog {
        log.with_status(&DateKey::from(date), PrayerName::Dhuhr, PrayerStatus::NotPrayed)
    }

    #[test]
    fn empty_log_has_no_streak() {
        assert_eq!(current_streak(&PrayerLog::new(), today()), 0);
        assert_eq!(best_streak(&PrayerLog::new()), 0);
    }

    #[test]
    fn today_and_yesterday_count() {
        let t = today();
        let log = pray(pray(PrayerLog::new(), t), t - Duration::days(1));
        let log = skip(log, t - Duration::days(2));
        assert_eq!(current_streak(&log, t), 2);
    }

    #[test]
    fn unlogged_today_keeps_yesterdays_streak() {
        let t = today();
        let log = pray(PrayerLog::new(), t - Duration::days(1));
        assert_eq!(current_streak(&log, t), 1);
    }

    #[test]
    fn today_marked_not_prayed_also_falls_back() {
        let t = today();
        let log = skip(pray(PrayerLog::new(), t - Duration::days(1)), t);
        assert_eq!(current_streak(&log, t), 1);
    }

    #[test]
    fn future_only_log_has_no_current_streak() {
        let t = today();
        let log = pray(PrayerLog::new(), t + Duration::days(3));
        assert_eq!(current_streak(&log, t), 0);
        assert_eq!(best_streak(&log), 1);
    }

    #[test]
    fn gap_two_days_back_ends_streak() {
        let t = today();
        let log = pray(PrayerLog::new(), t - Duration::days(2));
        assert_eq!(current_streak(&log, t), 0);
    }

    #[test]
    fn best_streak_finds_longest_run() {
        let t = today();
        let mut log = PrayerLog::new();
        for offset in [20, 19, 18, 17, 10, 9, 1, 0] {
            log = pray(log, t - Duration::days(offset));
        }
        log = skip(log, t - Duration::days(16));
        assert_eq!(best_streak(&log), 4);
        assert_eq!(streak(&log, t), Streak { current: 2, best: 4 });
    }

    #[test]
    fn best_streak_ignores_non_date_keys() {
        let log = PrayerLog::new().with_status(
            &DateKey::from("not-a-date"),
            PrayerName::Fajr,
            PrayerStatus::Late,
        );
        assert_eq!(best_streak(&log), 0);
    }
}
