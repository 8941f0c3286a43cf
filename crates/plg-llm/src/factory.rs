//! Oracle construction from configuration.

use std::sync::Arc;

use plg_config::{LlmConfig, LlmProvider};

use crate::{OpenAiClient, Oracle, OracleError};

/// Build the oracle named by `config.provider`.
///
/// # Errors
///
/// Returns `OracleError::Config` for an unsupported provider, a missing API
/// key, or an invalid base URL.
pub fn oracle_from_config(config: &LlmConfig) -> Result<Arc<dyn Oracle>, OracleError> {
    config
        .validate()
        .map_err(|e| OracleError::config(e.to_string()))?;

    match config.provider().map_err(|e| OracleError::config(e.to_string()))? {
        LlmProvider::OpenAi => {
            let client = OpenAiClient::new(
                &config.api_key,
                &config.base_url,
                &config.model,
                config.timeout(),
            )?;
            tracing::debug!(model = %config.model, base_url = %config.base_url, "openai oracle ready");
            Ok(Arc::new(client))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> LlmConfig {
        LlmConfig {
            api_key: "sk-test".into(),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn builds_openai_oracle() {
        assert!(oracle_from_config(&configured()).is_ok());
    }

    #[test]
    fn missing_key_is_config_error() {
        let result = oracle_from_config(&LlmConfig::default());
        assert!(matches!(result, Err(OracleError::Config(_))));
    }

    #[test]
    fn unsupported_provider_is_config_error() {
        let config = LlmConfig {
            provider: "mystery".into(),
            ..configured()
        };
        match oracle_from_config(&config) {
            Err(OracleError::Config(message)) => {
                assert!(message.contains("'mystery' is not supported"), "{message}");
            }
            Err(other) => panic!("expected config error, got {other}"),
            Ok(_) => panic!("expected config error"),
        }
    }
}
