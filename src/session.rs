use chrono::NaiveDate;
use log::warn;

use crate::db::{AccountRepo, KvStore, UserRepo};
use crate::error::{Result, TrackerError};
use crate::models::{DailyRecord, DateKey, PrayerLog, PrayerName, PrayerStatus, Summary};
use crate::stats;

/// The logged-in user's state: whose log, the current snapshot, and which day is shown.
///
/// Passed explicitly to whatever renders or mutates it. The store is lent per call so the
/// session never owns the durable copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    username: String,
    log: PrayerLog,
    viewing: NaiveDate,
    notice: Option<String>,
}

impl Session {
    pub fn new(username: impl Into<String>, log: PrayerLog, today: NaiveDate) -> Self {
        Self {
            username: username.into(),
            log,
            viewing: today,
            notice: None,
        }
    }

    /// Pick up the user recorded as current, if any. A log that cannot be read degrades to
    /// an empty one with a notice instead of failing.
    pub fn resume(store: &dyn KvStore, today: NaiveDate) -> Result<Option<Self>> {
        let Some(username) = AccountRepo::current_user(store)? else {
            return Ok(None);
        };
        let session = match UserRepo::load_log(store, &username) {
            Ok(log) => Self::new(username, log, today),
            Err(e) => {
                warn!("could not load log for '{}': {}", username, e);
                let mut session = Self::new(username, PrayerLog::new(), today);
                session.notice = Some(format!("Could not load saved prayers: {}", e));
                session
            }
        };
        Ok(Some(session))
    }

    pub fn resume_required(store: &dyn KvStore, today: NaiveDate) -> Result<Self> {
        Self::resume(store, today)?.ok_or(TrackerError::NotLoggedIn)
    }

    pub fn login(
        store: &dyn KvStore,
        username: &str,
        password: &str,
        today: NaiveDate,
    ) -> Result<Self> {
        let log = AccountRepo::login(store, username, password)?;
        Ok(Self::new(username, log, today))
    }

    pub fn signup(
        store: &dyn KvStore,
        username: &str,
        password: &str,
        today: NaiveDate,
    ) -> Result<Self> {
        AccountRepo::signup(store, username, password)?;
        Ok(Self::new(username, PrayerLog::new(), today))
    }

    /// Forget the current user. The log itself stays stored.
    pub fn logout(self, store: &dyn KvStore) -> Result<()> {
        AccountRepo::logout(store)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn log(&self) -> &PrayerLog {
        &self.log
    }

    pub fn viewing(&self) -> NaiveDate {
        self.viewing
    }

    pub fn viewing_key(&self) -> DateKey {
        DateKey::from_date(self.viewing)
    }

    pub fn viewing_record(&self) -> DailyRecord {
        self.log.record_or_default(&self.viewing_key())
    }

    pub fn is_viewing_today(&self, today: NaiveDate) -> bool {
        self.viewing_key() == DateKey::from_date(today)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn view_date(&mut self, date: NaiveDate) {
        self.viewing = date;
    }

    pub fn previous_day(&mut self) {
        if let Some(prev) = self.viewing.pred_opt() {
            self.viewing = prev;
        }
    }

    /// Step forward one day. Returns false, without moving, when already on `today`.
    pub fn next_day(&mut self, today: NaiveDate) -> bool {
        if self.viewing >= today {
            return false;
        }
        match self.viewing.succ_opt() {
            Some(next) => {
                self.viewing = next;
                true
            }
            None => false,
        }
    }

    /// Set one prayer on the viewed day and persist the new log.
    ///
    /// The new snapshot replaces the old one even if saving fails; the failure is kept as
    /// a notice and returned, and nothing retries it.
    pub fn update_status(
        &mut self,
        store: &dyn KvStore,
        prayer: PrayerName,
        status: PrayerStatus,
    ) -> Result<()> {
        let key = self.viewing_key();
        self.log = self.log.with_status(&key, prayer, status);
        self.persist(store)
    }

    /// Advance the prayer's status on the viewed day to the next one in the cycle.
    pub fn cycle_status(&mut self, store: &dyn KvStore, prayer: PrayerName) -> Result<()> {
        let next = self.viewing_record().status(prayer).cycle();
        self.update_status(store, prayer, next)
    }

    fn persist(&mut self, store: &dyn KvStore) -> Result<()> {
        match UserRepo::save_log(store, &self.username, &self.log) {
            Ok(()) => {
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                warn!("failed to save prayer log for '{}': {}", self.username, e);
                self.notice = Some(format!("Not saved: {}", e));
                Err(e)
            }
        }
    }

    pub fn summary(&self, today: NaiveDate) -> Summary {
        stats::summarize(&self.log, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[test]
    fn resume_without_current_user_is_none() {
        let store = MemoryStore::new();
        assert!(Session::resume(&store, today()).unwrap().is_none());
        assert!(matches!(
            Session::resume_required(&store, today()),
            Err(TrackerError::NotLoggedIn)
        ));
    }

    #[test]
    fn signup_then_resume_sees_saved_updates() {
        let store = MemoryStore::new();
        let mut session = Session::signup(&store, "amina", "pw", today()).unwrap();
        session
            .update_status(&store, PrayerName::Fajr, PrayerStatus::InCongregation)
            .unwrap();

        let resumed = Session::resume_required(&store, today()).unwrap();
        assert_eq!(resumed.username(), "amina");
        assert_eq!(
            resumed.viewing_record().status(PrayerName::Fajr),
            PrayerStatus::InCongregation
        );
    }

    #[test]
    fn cannot_step_past_today() {
        let store = MemoryStore::new();
        let mut session = Session::signup(&store, "amina", "pw", today()).unwrap();
        assert!(session.is_viewing_today(today()));
        assert!(!session.next_day(today()));

        session.previous_day();
        assert!(!session.is_viewing_today(today()));
        assert!(session.next_day(today()));
        assert!(session.is_viewing_today(today()));
    }

    #[test]
    fn updates_apply_to_viewed_day() {
        let store = MemoryStore::new();
        let mut session = Session::signup(&store, "amina", "pw", today()).unwrap();
        session.previous_day();
        session
            .update_status(&store, PrayerName::Asr, PrayerStatus::Late)
            .unwrap();

        let yesterday = DateKey::from_date(today().pred_opt().unwrap());
        assert_eq!(
            session.log().status(&yesterday, PrayerName::Asr),
            PrayerStatus::Late
        );
        assert_eq!(session.summary(today()).streak.current, 1);
        assert_eq!(session.summary(today()).today.completed, 0);
    }

    #[test]
    fn cycle_walks_through_statuses() {
        let store = MemoryStore::new();
        let mut session = Session::signup(&store, "amina", "pw", today()).unwrap();
        session.cycle_status(&store, PrayerName::Isha).unwrap();
        assert_eq!(
            session.viewing_record().status(PrayerName::Isha),
            PrayerStatus::InCongregation
        );
        session.cycle_status(&store, PrayerName::Isha).unwrap();
        assert_eq!(
            session.viewing_record().status(PrayerName::Isha),
            PrayerStatus::Alone
        );
    }

    #[test]
    fn logout_keeps_the_log() {
        let store = MemoryStore::new();
        let mut session = Session::signup(&store, "amina", "pw", today()).unwrap();
        session
            .update_status(&store, PrayerName::Dhuhr, PrayerStatus::Alone)
            .unwrap();
        session.logout(&store).unwrap();
        assert!(Session::resume(&store, today()).unwrap().is_none());

        let back = Session::login(&store, "amina", "pw", today()).unwrap();
        assert_eq!(
            back.viewing_record().status(PrayerName::Dhuhr),
            PrayerStatus::Alone
        );
    }
}
