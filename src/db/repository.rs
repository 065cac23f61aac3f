use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::db::store::KvStore;
use crate::error::{Result, TrackerError};
use crate::models::PrayerLog;

pub const CURRENT_USER_KEY: &str = "currentUser";
pub const USER_DATA_KEY: &str = "userData";

/// One account as stored under `userData`. The password is kept as plain text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub prayer_log: PrayerLog,
}

pub type UserData = BTreeMap<String, UserRecord>;

fn decode_user_data(blob: &str) -> Result<UserData> {
    serde_json::from_str(blob).map_err(TrackerError::from)
}

fn encode_user_data(data: &UserData) -> Result<String> {
    serde_json::to_string(data).map_err(|e| TrackerError::StorageUnavailable(e.to_string()))
}

// ─── User data ───────────────────────────────────────────────────────────────

pub struct UserRepo;

impl UserRepo {
    /// Read every account. A blob that does not parse is an error here; callers decide
    /// whether to degrade.
    pub fn load_all_strict(store: &dyn KvStore) -> Result<UserData> {
        match store.get(USER_DATA_KEY)? {
            None => Ok(UserData::new()),
            Some(blob) => decode_user_data(&blob),
        }
    }

    /// Read every account, treating an unreadable blob as no accounts at all.
    pub fn load_all(store: &dyn KvStore) -> Result<UserData> {
        match Self::load_all_strict(store) {
            Err(TrackerError::DeserializationFailure(msg)) => {
                warn!("ignoring unreadable user data: {}", msg);
                Ok(UserData::new())
            }
            other => other,
        }
    }

    pub fn save_all(store: &dyn KvStore, data: &UserData) -> Result<()> {
        store.set(USER_DATA_KEY, &encode_user_data(data)?)
    }

    /// The user's log, or an empty one when the user or the store has nothing yet.
    pub fn load_log(store: &dyn KvStore, username: &str) -> Result<PrayerLog> {
        let log = Self::load_all(store)?
            .remove(username)
            .map(|record| record.prayer_log)
            .unwrap_or_default();
        debug!("loaded {} day(s) for '{}'", log.len(), username);
        Ok(log)
    }

    /// Replace the user's log, keeping the rest of their record.
    ///
    /// Refuses to write over a blob it cannot parse, since that would drop every other
    /// account stored alongside.
    pub fn save_log(store: &dyn KvStore, username: &str, log: &PrayerLog) -> Result<()> {
        let mut data = Self::load_all_strict(store)?;
        data.entry(username.to_string()).or_default().prayer_log = log.clone();
        Self::save_all(store, &data)?;
        debug!("saved {} day(s) for '{}'", log.len(), username);
        Ok(())
    }
}

// ─── Accounts ────────────────────────────────────────────────────────────────

pub struct AccountRepo;

impl AccountRepo {
    pub fn current_user(store: &dyn KvStore) -> Result<Option<String>> {
        Ok(store
            .get(CURRENT_USER_KEY)?
            .filter(|name| !name.is_empty()))
    }

    fn set_current_user(store: &dyn KvStore, username: &str) -> Result<()> {
        store.set(CURRENT_USER_KEY, username)
    }

    /// Create an account with an empty log and make it the current user.
    pub fn signup(store: &dyn KvStore, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(TrackerError::MissingCredentials);
        }
        let mut data = UserRepo::load_all_strict(store)?;
        if data.contains_key(username) {
            return Err(TrackerError::UsernameTaken(username.to_string()));
        }
        data.insert(
            username.to_string(),
            UserRecord {
                password: password.to_string(),
                prayer_log: PrayerLog::new(),
            },
        );
        UserRepo::save_all(store, &data)?;
        Self::set_current_user(store, username)?;
        info!("created account '{}'", username);
        Ok(())
    }

    /// Check the password and make the account current. Returns the stored log.
    pub fn login(store: &dyn KvStore, username: &str, password: &str) -> Result<PrayerLog> {
        if username.is_empty() || password.is_empty() {
            return Err(TrackerError::MissingCredentials);
        }
        let mut data = UserRepo::load_all(store)?;
        let record = match data.remove(username) {
            Some(record) if record.password == password => record,
            _ => return Err(TrackerError::InvalidCredentials),
        };
        Self::set_current_user(store, username)?;
        info!("logged in as '{}'", username);
        Ok(record.prayer_log)
    }

    pub fn logout(store: &dyn KvStore) -> Result<()> {
        store.remove(CURRENT_USER_KEY)
    }
}
