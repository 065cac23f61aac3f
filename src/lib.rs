//! Log the five daily prayers per calendar day and derive streaks and breakdowns.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod session;
pub mod stats;

pub use error::{Result, TrackerError};
pub use session::Session;
