use std::collections::BTreeMap;

use crate::models::{
    empty_counts, DailyRecord, DayProgress, PrayerLog, PrayerName, PrayerStatus, Tally,
};

/// Count resolved statuses over every logged day, five slots per day.
pub fn tally(log: &PrayerLog) -> Tally {
    let mut result = Tally::empty();

    for record in log.records() {
        for (prayer, status) in record.resolved() {
            *result.overall.entry(status).or_insert(0) += 1;
            *result
                .per_prayer
                .entry(prayer)
                .or_insert_with(empty_counts)
                .entry(status)
                .or_insert(0) += 1;
            if status.is_prayed() {
                result.total_non_empty += 1;
            }
        }
    }

    result
}

/// Share of each key in `counts`, as an un-rounded percentage.
///
/// An all-zero input yields all-zero output rather than dividing by zero.
pub fn percentages<K: Ord + Clone>(counts: &BTreeMap<K, u32>) -> BTreeMap<K, f64> {
    let total: u64 = counts.values().map(|c| u64::from(*c)).sum();
    counts
        .iter()
        .map(|(key, count)| {
            let pct = if total == 0 {
                0.0
            } else {
                100.0 * f64::from(*count) / total as f64
            };
            (key.clone(), pct)
        })
        .collect()
}

impl Tally {
    pub fn overall_percentages(&self) -> BTreeMap<PrayerStatus, f64> {
        percentages(&self.overall)
    }

    /// Per-prayer breakdown, leaving out prayers that were never counted.
    pub fn per_prayer_percentages(&self) -> BTreeMap<PrayerName, BTreeMap<PrayerStatus, f64>> {
        self.per_prayer
            .iter()
            .filter(|(_, counts)| counts.values().any(|c| *c > 0))
            .map(|(prayer, counts)| (*prayer, percentages(counts)))
            .collect()
    }
}

pub fn day_progress(record: &DailyRecord) -> DayProgress {
    let total = PrayerName::ALL.len() as u32;
    let completed = record.completed_count();
    DayProgress {
        completed,
        total,
        percent: 100.0 * f64::from(completed) / f64::from(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateKey;

    #[test]
    fn single_late_day() {
        let log = PrayerLog::new().with_status(
            &DateKey::from("2024-06-01"),
            PrayerName::Asr,
            PrayerStatus::Late,
        );
        let t = tally(&log);
        assert_eq!(t.count(PrayerStatus::Late), 1);
        assert_eq!(t.count(PrayerStatus::NotPrayed), 4);
        assert_eq!(t.count(PrayerStatus::Alone), 0);
        assert_eq!(t.total_non_empty, 1);
        assert_eq!(t.prayer_count(PrayerName::Asr, PrayerStatus::Late), 1);
        assert_eq!(t.prayer_count(PrayerName::Fajr, PrayerStatus::NotPrayed), 1);
        assert_eq!(t.days_logged(), 1);
    }

    #[test]
    fn sparse_records_count_five_slots() {
        let sparse: DailyRecord = [(PrayerName::Fajr, PrayerStatus::InCongregation)]
            .into_iter()
            .collect();
        let log: PrayerLog = [(DateKey::from("2024-06-02"), sparse)].into_iter().collect();
        let t = tally(&log);
        assert_eq!(t.total_slots(), 5);
        assert_eq!(t.count(PrayerStatus::NotPrayed), 4);
        assert_eq!(t.count(PrayerStatus::InCongregation), 1);
    }

    #[test]
    fn empty_log_tallies_to_zero() {
        let t = tally(&PrayerLog::new());
        assert_eq!(t, Tally::empty());
        assert_eq!(t.total_slots(), 0);
        assert!(t.per_prayer_percentages().is_empty());
        assert!(t.overall_percentages().values().all(|p| *p == 0.0));
    }

    #[test]
    fn tally_ignores_insertion_order() {
        let a = DateKey::from("2024-06-01");
        let b = DateKey::from("2024-06-02");
        let one = PrayerLog::new()
            .with_status(&a, PrayerName::Fajr, PrayerStatus::Alone)
            .with_status(&b, PrayerName::Isha, PrayerStatus::Late);
        let two = PrayerLog::new()
            .with_status(&b, PrayerName::Isha, PrayerStatus::Late)
            .with_status(&a, PrayerName::Fajr, PrayerStatus::Alone);
        assert_eq!(tally(&one), tally(&two));
    }

    #[test]
    fn percentages_split_total() {
        let counts: BTreeMap<&str, u32> = [("a", 3), ("b", 1)].into_iter().collect();
        let pct = percentages(&counts);
        assert_eq!(pct["a"], 75.0);
        assert_eq!(pct["b"], 25.0);
    }

    #[test]
    fn percentages_of_nothing_are_zero() {
        let counts: BTreeMap<&str, u32> = [("a", 0), ("b", 0)].into_iter().collect();
        let pct = percentages(&counts);
        assert_eq!(pct["a"], 0.0);
        assert_eq!(pct["b"], 0.0);
    }

    #[test]
    fn per_prayer_percentages_per_prayer() {
        let a = DateKey::from("2024-06-01");
        let b = DateKey::from("2024-06-02");
        let log = PrayerLog::new()
            .with_status(&a, PrayerName::Fajr, PrayerStatus::InCongregation)
            .with_status(&b, PrayerName::Fajr, PrayerStatus::Late);
        let pct = tally(&log).per_prayer_percentages();
        assert_eq!(pct[&PrayerName::Fajr][&PrayerStatus::InCongregation], 50.0);
        assert_eq!(pct[&PrayerName::Fajr][&PrayerStatus::Late], 50.0);
        assert_eq!(pct[&PrayerName::Isha][&PrayerStatus::NotPrayed], 100.0);
    }

    #[test]
    fn progress_is_share_of_five() {
        let mut record = DailyRecord::full_default();
        record.set(PrayerName::Fajr, PrayerStatus::Alone);
        record.set(PrayerName::Maghrib, PrayerStatus::Late);
        let progress = day_progress(&record);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 5);
        assert_eq!(progress.percent, 40.0);
    }
}
