//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use plg_config::{LlmProvider, PlgConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_llm_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[llm]
provider = "openai"
api_key = "sk-from-toml"
model = "gpt-4o-mini"
base_url = "http://localhost:8080/v1"
timeout_secs = 30
"#,
        )?;

        let config: PlgConfig = Figment::from(Serialized::defaults(PlgConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.llm.api_key, "sk-from-toml");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.base_url, "http://localhost:8080/v1");
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.llm.provider().unwrap(), LlmProvider::OpenAi);
        assert!(config.llm.validate().is_ok());
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
db_path = "./trees.db"
default_depth = 3
default_children = 4
"#,
        )?;

        let config: PlgConfig = Figment::from(Serialized::defaults(PlgConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.db_path(), std::path::PathBuf::from("./trees.db"));
        assert_eq!(config.general.default_depth, 3);
        assert_eq!(config.general.default_children, 4);
        assert!(config.general.sessions_dir.is_empty());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[llm]
api_key = "sk-from-toml"
model = "gpt-4o-mini"
"#,
        )?;
        jail.set_env("PLG_LLM__API_KEY", "sk-from-env");
        jail.set_env("PLG_GENERAL__DEFAULT_CHILDREN", "5");

        let config: PlgConfig = Figment::from(Serialized::defaults(PlgConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("PLG_").split("__"))
            .extract()?;

        assert_eq!(config.llm.api_key, "sk-from-env");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.general.default_children, 5);
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".plg")?;
        jail.create_file(
            ".plg/config.toml",
            r#"
[general]
default_depth = 4
"#,
        )?;
        jail.set_env("PLG_LLM__MODEL", "gpt-4o");

        let config = PlgConfig::load().expect("config loads");
        assert_eq!(config.general.default_depth, 4);
        assert_eq!(config.llm.model, "gpt-4o");
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("PLG_GENERAL__DEFAULT_DEPTH", "deep");
        let result = PlgConfig::load();
        assert!(matches!(result, Err(plg_config::ConfigError::Figment(_))));
        Ok(())
    });
}
