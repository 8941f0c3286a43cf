use plg_config::PlgConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PlgConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PlgConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.llm.is_configured() && has_single_underscore_key(&env_keys, "PLG_LLM") {
        warnings.push(
            "LLM config appears default while PLG_LLM* env vars exist. Use double underscores (example: PLG_LLM__API_KEY)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "PLG_GENERAL") {
        warnings.push(
            "PLG_GENERAL* env vars need double underscores to apply (example: PLG_GENERAL__DEFAULT_DEPTH)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
