use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::prayer::{PrayerName, PrayerStatus};

pub type StatusCounts = BTreeMap<PrayerStatus, u32>;

/// Counts with every status present at zero, so lookups never miss.
pub fn empty_counts() -> StatusCounts {
    PrayerStatus::ALL.iter().map(|s| (*s, 0)).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProgress {
    pub completed: u32,
    pub total: u32,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub overall: StatusCounts,
    pub per_prayer: BTreeMap<PrayerName, StatusCounts>,
    pub total_non_empty: u32,
}

impl Tally {
    pub fn empty() -> Self {
        Self {
            overall: empty_counts(),
            per_prayer: PrayerName::ALL.iter().map(|p| (*p, empty_counts())).collect(),
            total_non_empty: 0,
        }
    }

    pub fn count(&self, status: PrayerStatus) -> u32 {
        self.overall.get(&status).copied().unwrap_or(0)
    }

    pub fn prayer_count(&self, prayer: PrayerName, status: PrayerStatus) -> u32 {
        self.per_prayer
            .get(&prayer)
            .and_then(|counts| counts.get(&status))
            .copied()
            .unwrap_or(0)
    }

    /// Every counted slot, prayed or not. Always five per logged day.
    pub fn total_slots(&self) -> u32 {
        self.overall.values().sum()
    }

    pub fn days_logged(&self) -> u32 {
        self.total_slots() / PrayerName::ALL.len() as u32
    }
}

/// One column of the history grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDay {
    pub date: String,
    pub statuses: [(PrayerName, PrayerStatus); 5],
}

impl HistoryDay {
    pub fn completed(&self) -> u32 {
        self.statuses.iter().filter(|(_, s)| s.is_prayed()).count() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub streak: Streak,
    pub tally: Tally,
    pub today: DayProgress,
}
