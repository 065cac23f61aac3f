use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    pub const ALL: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "fajr",
            PrayerName::Dhuhr => "dhuhr",
            PrayerName::Asr => "asr",
            PrayerName::Maghrib => "maghrib",
            PrayerName::Isha => "isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    /// Rough time of day the prayer falls in.
    pub fn period(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Dawn",
            PrayerName::Dhuhr => "Noon",
            PrayerName::Asr => "Afternoon",
            PrayerName::Maghrib => "Sunset",
            PrayerName::Isha => "Night",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(TrackerError::InvalidArgument(format!(
                "unknown prayer '{}', expected one of: fajr, dhuhr, asr, maghrib, isha",
                s
            ))),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PrayerStatus {
    #[default]
    #[serde(rename = "Not Prayed", alias = "NotPrayed")]
    NotPrayed,
    #[serde(rename = "Jama'ah", alias = "InCongregation")]
    InCongregation,
    Alone,
    Late,
}

impl PrayerStatus {
    pub const ALL: [PrayerStatus; 4] = [
        PrayerStatus::NotPrayed,
        PrayerStatus::InCongregation,
        PrayerStatus::Alone,
        PrayerStatus::Late,
    ];

    /// Order used by charts and legends.
    pub const DISPLAY_ORDER: [PrayerStatus; 4] = [
        PrayerStatus::InCongregation,
        PrayerStatus::Alone,
        PrayerStatus::Late,
        PrayerStatus::NotPrayed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerStatus::NotPrayed => "not-prayed",
            PrayerStatus::InCongregation => "jamaah",
            PrayerStatus::Alone => "alone",
            PrayerStatus::Late => "late",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerStatus::NotPrayed => "Not Prayed",
            PrayerStatus::InCongregation => "In Jama'ah",
            PrayerStatus::Alone => "Alone",
            PrayerStatus::Late => "Late",
        }
    }

    pub fn is_prayed(&self) -> bool {
        *self != PrayerStatus::NotPrayed
    }

    /// Next status in `ALL` order, wrapping around. Used for one-key toggling.
    pub fn cycle(&self) -> PrayerStatus {
        match self {
            PrayerStatus::NotPrayed => PrayerStatus::InCongregation,
            PrayerStatus::InCongregation => PrayerStatus::Alone,
            PrayerStatus::Alone => PrayerStatus::Late,
            PrayerStatus::Late => PrayerStatus::NotPrayed,
        }
    }
}

impl std::fmt::Display for PrayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "notprayed" | "none" | "missed" => Ok(PrayerStatus::NotPrayed),
            "jamaah" | "congregation" | "incongregation" | "injamaah" => {
                Ok(PrayerStatus::InCongregation)
            }
            "alone" => Ok(PrayerStatus::Alone),
            "late" => Ok(PrayerStatus::Late),
            _ => Err(TrackerError::InvalidArgument(format!(
                "unknown status '{}', expected one of: jamaah, alone, late, not-prayed",
                s
            ))),
        }
    }
}

/// The statuses logged for one calendar day.
///
/// Entries may be missing; every read goes through [`resolve_status`], which treats a
/// missing prayer as [`PrayerStatus::NotPrayed`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyRecord(BTreeMap<PrayerName, PrayerStatus>);

impl DailyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record with all five prayers explicitly stored as not prayed.
    pub fn full_default() -> Self {
        Self(
            PrayerName::ALL
                .iter()
                .map(|p| (*p, PrayerStatus::NotPrayed))
                .collect(),
        )
    }

    pub fn status(&self, prayer: PrayerName) -> PrayerStatus {
        resolve_status(self, prayer)
    }

    pub fn set(&mut self, prayer: PrayerName, status: PrayerStatus) {
        self.0.insert(prayer, status);
    }

    /// All five prayers in canonical order, with defaults filled in.
    pub fn resolved(&self) -> [(PrayerName, PrayerStatus); 5] {
        PrayerName::ALL.map(|p| (p, self.status(p)))
    }

    pub fn completed_count(&self) -> u32 {
        PrayerName::ALL
            .iter()
            .filter(|p| self.status(**p).is_prayed())
            .count() as u32
    }

    /// A day counts towards a streak once any prayer is logged as prayed.
    pub fn is_satisfied(&self) -> bool {
        self.completed_count() > 0
    }

    /// Number of entries physically stored, not the resolved count.
    pub fn stored_len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(PrayerName, PrayerStatus)> for DailyRecord {
    fn from_iter<I: IntoIterator<Item = (PrayerName, PrayerStatus)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn resolve_status(record: &DailyRecord, prayer: PrayerName) -> PrayerStatus {
    record.0.get(&prayer).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_prayer_resolves_to_not_prayed() {
        let record: DailyRecord = [(PrayerName::Asr, PrayerStatus::Late)].into_iter().collect();
        assert_eq!(record.status(PrayerName::Asr), PrayerStatus::Late);
        assert_eq!(record.status(PrayerName::Fajr), PrayerStatus::NotPrayed);
        assert_eq!(record.stored_len(), 1);
    }

    #[test]
    fn satisfied_with_a_single_prayer() {
        let mut record = DailyRecord::full_default();
        assert!(!record.is_satisfied());
        record.set(PrayerName::Isha, PrayerStatus::Alone);
        assert!(record.is_satisfied());
        assert_eq!(record.completed_count(), 1);
    }

    #[test]
    fn explicit_not_prayed_counts_like_absence() {
        assert_eq!(DailyRecord::new().completed_count(), 0);
        assert_eq!(DailyRecord::full_default().completed_count(), 0);
        assert!(!DailyRecord::full_default().is_satisfied());
    }

    #[test]
    fn parses_prayer_spellings() {
        assert_eq!("Zuhr".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!(" ISHA ".parse::<PrayerName>().unwrap(), PrayerName::Isha);
        assert!(matches!(
            "tahajjud".parse::<PrayerName>(),
            Err(TrackerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn parses_status_spellings() {
        assert_eq!(
            "Jama'ah".parse::<PrayerStatus>().unwrap(),
            PrayerStatus::InCongregation
        );
        assert_eq!(
            "not-prayed".parse::<PrayerStatus>().unwrap(),
            PrayerStatus::NotPrayed
        );
        assert_eq!("LATE".parse::<PrayerStatus>().unwrap(), PrayerStatus::Late);
        assert!(matches!(
            "done".parse::<PrayerStatus>(),
            Err(TrackerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn record_serializes_with_stored_spellings() {
        let record: DailyRecord = [
            (PrayerName::Fajr, PrayerStatus::InCongregation),
            (PrayerName::Dhuhr, PrayerStatus::NotPrayed),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Fajr":"Jama'ah","Dhuhr":"Not Prayed"}"#);

        let back: DailyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn cycle_visits_every_status() {
        let mut status = PrayerStatus::NotPrayed;
        for _ in 0..PrayerStatus::ALL.len() {
            status = status.cycle();
        }
        assert_eq!(status, PrayerStatus::NotPrayed);
    }
}
