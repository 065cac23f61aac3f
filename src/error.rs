use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// A prayer name, status or date that is not part of the closed vocabulary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The stored blob exists but does not parse into the expected shape.
    #[error("stored data could not be read: {0}")]
    DeserializationFailure(String),

    #[error("username and password are required")]
    MissingCredentials,

    #[error("username '{0}' already exists, please choose another")]
    UsernameTaken(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("no user is logged in")]
    NotLoggedIn,
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        TrackerError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::DeserializationFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
