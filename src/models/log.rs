use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{Result, TrackerError};
use crate::models::prayer::{DailyRecord, PrayerName, PrayerStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` key for one local calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date.format(DATE_FORMAT).to_string())
    }

    /// Key for the current day in the local calendar.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// The calendar date this key names, or `None` for keys that are not dates.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey::from_date(date)
    }
}

impl From<&str> for DateKey {
    fn from(key: &str) -> Self {
        DateKey(key.to_string())
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a user-supplied `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|e| {
        TrackerError::InvalidArgument(format!("bad date '{}' (expected YYYY-MM-DD): {}", s, e))
    })
}

/// Every day the user has touched, keyed by date.
///
/// The log is treated as an immutable snapshot: [`PrayerLog::with_status`] returns a new
/// log and leaves `self` alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrayerLog(BTreeMap<DateKey, DailyRecord>);

impl PrayerLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: &DateKey) -> Option<&DailyRecord> {
        self.0.get(date)
    }

    /// The day's record with nothing logged filled in as not prayed.
    pub fn record_or_default(&self, date: &DateKey) -> DailyRecord {
        self.0.get(date).cloned().unwrap_or_else(DailyRecord::full_default)
    }

    pub fn status(&self, date: &DateKey, prayer: PrayerName) -> PrayerStatus {
        self.0
            .get(date)
            .map(|record| record.status(prayer))
            .unwrap_or_default()
    }

    pub fn is_satisfied(&self, date: &DateKey) -> bool {
        self.0.get(date).is_some_and(DailyRecord::is_satisfied)
    }

    pub fn with_status(&self, date: &DateKey, prayer: PrayerName, status: PrayerStatus) -> Self {
        let mut days = self.0.clone();
        days.entry(date.clone())
            .or_insert_with(DailyRecord::full_default)
            .set(prayer, status);
        PrayerLog(days)
    }

    /// String-typed form of [`PrayerLog::with_status`] for callers at the input boundary.
    pub fn with_status_str(&self, date: &str, prayer: &str, status: &str) -> Result<Self> {
        let prayer = PrayerName::from_str(prayer)?;
        let status = PrayerStatus::from_str(status)?;
        Ok(self.with_status(&DateKey::from(date), prayer, status))
    }

    pub fn days(&self) -> impl Iterator<Item = (&DateKey, &DailyRecord)> {
        self.0.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &DailyRecord> {
        self.0.values()
    }

    /// Earliest key that parses as a calendar date.
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.0.keys().filter_map(DateKey::date).min()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(DateKey, DailyRecord)> for PrayerLog {
    fn from_iter<I: IntoIterator<Item = (DateKey, DailyRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_key_is_zero_padded_iso() {
        assert_eq!(DateKey::from_date(day(2024, 3, 7)).as_str(), "2024-03-07");
        assert_eq!(DateKey::from("2024-03-07").date(), Some(day(2024, 3, 7)));
        assert_eq!(DateKey::from("someday").date(), None);
    }

    #[test]
    fn date_key_ignores_time_of_day() {
        let morning = day(2024, 3, 7).and_hms_opt(0, 0, 1).unwrap();
        let night = day(2024, 3, 7).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(
            DateKey::from_date(morning.date()),
            DateKey::from_date(night.date())
        );
    }

    #[test]
    fn with_status_fills_a_new_day() {
        let key = DateKey::from_date(day(2024, 1, 1));
        let log = PrayerLog::new().with_status(&key, PrayerName::Asr, PrayerStatus::Late);

        let record = log.get(&key).unwrap();
        assert_eq!(record.stored_len(), 5);
        assert_eq!(record.status(PrayerName::Asr), PrayerStatus::Late);
        assert_eq!(record.status(PrayerName::Fajr), PrayerStatus::NotPrayed);
    }

    #[test]
    fn with_status_leaves_the_input_untouched() {
        let key = DateKey::from_date(day(2024, 1, 1));
        let before = PrayerLog::new().with_status(&key, PrayerName::Fajr, PrayerStatus::Alone);
        let snapshot = before.clone();

        let after = before.with_status(&key, PrayerName::Fajr, PrayerStatus::Late);
        assert_eq!(before, snapshot);
        assert_eq!(before.status(&key, PrayerName::Fajr), PrayerStatus::Alone);
        assert_eq!(after.status(&key, PrayerName::Fajr), PrayerStatus::Late);
    }

    #[test]
    fn with_status_preserves_other_days() {
        let a = DateKey::from_date(day(2024, 1, 1));
        let b = DateKey::from_date(day(2024, 1, 2));
        let log = PrayerLog::new()
            .with_status(&a, PrayerName::Isha, PrayerStatus::InCongregation)
            .with_status(&b, PrayerName::Fajr, PrayerStatus::Late);

        assert_eq!(log.status(&a, PrayerName::Isha), PrayerStatus::InCongregation);
        assert_eq!(log.status(&b, PrayerName::Fajr), PrayerStatus::Late);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn string_mutation_rejects_unknown_names() {
        let log = PrayerLog::new();
        assert!(matches!(
            log.with_status_str("2024-01-01", "witr", "late"),
            Err(TrackerError::InvalidArgument(_))
        ));
        assert!(matches!(
            log.with_status_str("2024-01-01", "fajr", "sometimes"),
            Err(TrackerError::InvalidArgument(_))
        ));
        let updated = log.with_status_str("2024-01-01", "fajr", "alone").unwrap();
        assert_eq!(
            updated.status(&DateKey::from("2024-01-01"), PrayerName::Fajr),
            PrayerStatus::Alone
        );
    }

    #[test]
    fn log_serializes_as_object_keyed_by_date() {
        let key = DateKey::from("2024-05-01");
        let log = PrayerLog::new().with_status(&key, PrayerName::Maghrib, PrayerStatus::Alone);
        let json: serde_json::Value = serde_json::to_value(&log).unwrap();
        assert_eq!(json["2024-05-01"]["Maghrib"], "Alone");
        assert_eq!(json["2024-05-01"]["Fajr"], "Not Prayed");
    }

    #[test]
    fn earliest_date_skips_non_date_keys() {
        let log = PrayerLog::new()
            .with_status(&DateKey::from("draft"), PrayerName::Fajr, PrayerStatus::Late)
            .with_status(&DateKey::from("2024-02-10"), PrayerName::Fajr, PrayerStatus::Late)
            .with_status(&DateKey::from("2024-02-03"), PrayerName::Fajr, PrayerStatus::Late);
        assert_eq!(log.earliest_date(), Some(day(2024, 2, 3)));
    }
}
