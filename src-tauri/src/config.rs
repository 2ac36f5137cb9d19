//! Application Configuration
//!
//! Resolved once at startup from the app data directory and environment.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::Level;

/// Database file inside the app data directory
pub const DB_FILE_NAME: &str = "todo.db";
/// Overrides the database path
pub const ENV_DB_PATH: &str = "TODO_SYNC_DB";
/// Overrides the log level (error, warn, info, debug, trace)
pub const ENV_LOG_LEVEL: &str = "TODO_SYNC_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env(app_data_dir: &Path) -> Self {
        Self::resolve(app_data_dir, |key| std::env::var(key).ok())
    }

    /// Unset, empty or unparsable overrides fall back to the defaults
    pub fn resolve(app_data_dir: &Path, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup(ENV_DB_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| app_data_dir.join(DB_FILE_NAME));

        let log_level = lookup(ENV_LOG_LEVEL)
            .and_then(|l| Level::from_str(l.trim()).ok())
            .unwrap_or(Level::INFO);

        Self { db_path, log_level }
    }
}
