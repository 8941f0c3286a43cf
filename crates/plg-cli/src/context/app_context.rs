use std::sync::Arc;

use anyhow::Context;
use plg_config::PlgConfig;
use plg_db::PlgDb;
use plg_llm::Oracle;

use crate::bootstrap;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: PlgDb,
    pub config: PlgConfig,
}

impl AppContext {
    /// Open the tree store at `--db` or the configured path.
    pub async fn init(config: PlgConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        let db_path = bootstrap::resolve_db_path(&config, db_override);
        bootstrap::ensure_parent_dir(&db_path).await?;

        let db_path_str = db_path.to_string_lossy();
        let db = PlgDb::open_local(&db_path_str)
            .await
            .with_context(|| format!("failed to open database at {}", db_path.display()))?;

        Ok(Self { db, config })
    }

    /// Build the configured oracle. Only commands that generate text call
    /// this, so `show`, `list` and `export` work without an API key.
    pub fn oracle(&self) -> anyhow::Result<Arc<dyn Oracle>> {
        plg_llm::oracle_from_config(&self.config.llm).context(
            "LLM oracle is not available; set PLG_LLM__API_KEY or [llm] api_key in .plg/config.toml",
        )
    }

    /// Configured BFS depth unless overridden on the command line.
    #[must_use]
    pub fn depth_or_default(&self, depth: Option<u32>) -> u32 {
        depth.unwrap_or(self.config.general.default_depth)
    }

    /// Configured fan-out unless overridden on the command line.
    #[must_use]
    pub fn children_or_default(&self, children: Option<u32>) -> usize {
        children.unwrap_or(self.config.general.default_children) as usize
    }
}
