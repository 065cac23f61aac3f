pub mod settings;

pub use settings::{AppConfig, HistoryConfig, StorageConfig, TuiConfig};
