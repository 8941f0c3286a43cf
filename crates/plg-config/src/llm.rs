//! Language-model (oracle) configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::ConfigError;

fn default_provider() -> String {
    LlmProvider::OpenAi.as_str().to_string()
}

fn default_model() -> String {
    "gpt-4-turbo-preview".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    120
}

/// Supported completion providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi,
}

impl LlmProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
        }
    }

    /// Parse a provider name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unsupported provider.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            other => Err(ConfigError::InvalidValue {
                field: "llm.provider".to_string(),
                reason: format!("the LLM provider '{other}' is not supported"),
            }),
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Completion provider name. Only `openai`-compatible endpoints are supported.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// API key sent as a bearer token.
    #[serde(default)]
    pub api_key: String,

    /// Model name passed through to the provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the chat-completions API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    /// Check if the minimum required fields for remote calls are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.model.is_empty()
    }

    /// Resolve the configured provider name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unsupported provider.
    pub fn provider(&self) -> Result<LlmProvider, ConfigError> {
        LlmProvider::parse(&self.provider)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Fail with a descriptive error unless the section is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the key or model is missing,
    /// and `ConfigError::InvalidValue` for an unsupported provider, a zero
    /// timeout, or a base URL that is not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.provider()?;
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "llm".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "llm.base_url".to_string(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        Ok(())
    }
}
