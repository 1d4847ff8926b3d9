use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while asking a provider for advice.
/// None of these ever reach the user; they are logged and replaced by the
/// fallback text.
#[derive(Debug)]
pub enum ProviderError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    Parse(String),
    /// The response parsed but carried no text.
    Empty,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
            ProviderError::Empty => write!(f, "empty response"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Sends a single prompt and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Stand-in used when no API key is configured. Every call fails, so the
/// advice panel always shows the fallback text.
pub struct UnconfiguredProvider;

#[async_trait]
impl AdviceProvider for UnconfiguredProvider {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Config("no API key configured".to_string()))
    }
}

/// Reads an error body for logging; the body itself may fail to arrive.
pub(crate) async fn api_error(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    ProviderError::Api { status, message }
}
