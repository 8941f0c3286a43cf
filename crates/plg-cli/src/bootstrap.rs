use std::path::{Path, PathBuf};

use anyhow::Context;

/// Load layered configuration, reading `.env` from the working directory
/// first.
pub fn load_config() -> anyhow::Result<plg_config::PlgConfig> {
    plg_config::PlgConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

/// Resolve the database path: `--db` wins over `general.db_path`.
pub fn resolve_db_path(config: &plg_config::PlgConfig, db_override: Option<&str>) -> PathBuf {
    db_override.map_or_else(|| config.general.db_path(), PathBuf::from)
}

/// Create the parent directory of a database file when it does not exist.
pub async fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
