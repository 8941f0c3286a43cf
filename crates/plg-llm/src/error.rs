//! Oracle error types.

use thiserror::Error;

/// Errors from an oracle call.
///
/// These are transport and protocol failures. An answer whose text is
/// not what the caller hoped for is not an error at this layer.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Missing API key, unsupported provider, or a client that cannot be built.
    #[error("oracle configuration error: {0}")]
    Config(String),

    /// HTTP/network error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("oracle API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered 2xx with a body that is not a chat completion.
    #[error("could not decode oracle response: {0}")]
    Decode(String),
}

impl OracleError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
