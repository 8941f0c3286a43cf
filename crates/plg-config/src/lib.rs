//! # plg-config
//!
//! Layered configuration loading for the Parallel Life Generator using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PLG_*` prefix, `__` as separator)
//! 2. Project-level `.plg/config.toml`
//! 3. User-level `~/.config/plg/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PLG_LLM__API_KEY` -> `llm.api_key`,
//! `PLG_GENERAL__DEFAULT_DEPTH` -> `general.default_depth`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use plg_config::PlgConfig;
//!
//! let config = PlgConfig::load_with_dotenv().expect("config");
//! if config.llm.is_configured() {
//!     println!("model: {}", config.llm.model);
//! }
//! ```

mod error;
mod general;
mod llm;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use llm::{LlmConfig, LlmProvider};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlgConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PlgConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".plg/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PLG_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("plg").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PlgConfig::default();
        assert!(!config.llm.is_configured());
        assert_eq!(config.general.default_depth, 2);
        assert_eq!(config.general.default_children, 2);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PlgConfig = PlgConfig::figment().extract()?;
            assert_eq!(config.llm.provider().unwrap(), LlmProvider::OpenAi);
            assert_eq!(config.general.default_children, 2);
            Ok(())
        });
    }
}
