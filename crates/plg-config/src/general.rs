//! General application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default BFS depth for `plg expand` and `plg launch`.
const fn default_depth() -> u32 {
    2
}

/// Default fan-out requested per node.
const fn default_children() -> u32 {
    2
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path to the libSQL database file. Empty means `~/.plg/plg.db`.
    #[serde(default)]
    pub db_path: String,

    /// Directory for timestamped session exports. Empty means `~/plg_sessions`.
    #[serde(default)]
    pub sessions_dir: String,

    /// Default number of BFS levels generated by an expansion.
    #[serde(default = "default_depth")]
    pub default_depth: u32,

    /// Default number of branches requested per node.
    #[serde(default = "default_children")]
    pub default_children: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            db_path: String::new(),
            sessions_dir: String::new(),
            default_depth: default_depth(),
            default_children: default_children(),
        }
    }
}

impl GeneralConfig {
    /// Resolved database path.
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        if self.db_path.is_empty() {
            home_dir().join(".plg").join("plg.db")
        } else {
            PathBuf::from(&self.db_path)
        }
    }

    /// Resolved sessions export directory.
    #[must_use]
    pub fn sessions_dir(&self) -> PathBuf {
        if self.sessions_dir.is_empty() {
            home_dir().join("plg_sessions")
        } else {
            PathBuf::from(&self.sessions_dir)
        }
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
