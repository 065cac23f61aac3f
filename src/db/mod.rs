pub mod migrations;
pub mod repository;
pub mod store;

pub use repository::{AccountRepo, UserData, UserRecord, UserRepo};
pub use store::{KvStore, MemoryStore, SqliteStore};
