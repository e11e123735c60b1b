use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_SENTIMENT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_SENTIMENT_TIMEOUT_SECS: u64 = 20;

/// Older deployments export the classifier token under this name.
pub const LEGACY_TOKEN_ENV: &str = "HF_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid sentiment model URL {url}: {reason}")]
    InvalidModelUrl { url: String, reason: String },

    #[error("Invalid configuration: {details}")]
    InvalidConfiguration { details: String },
}

/// Process-wide settings, resolved once at start-up and shared by `Arc`.
#[derive(Clone)]
pub struct ServerConfig {
    pub address: String,
    pub sentiment_model_url: String,
    /// Bearer token for the inference API. `None` sends no `Authorization` header.
    pub hf_api_token: Option<String>,
    pub sentiment_timeout_secs: u64,
}

impl ServerConfig {
    pub fn new(
        address: String,
        sentiment_model_url: String,
        hf_api_token: Option<String>,
        sentiment_timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        if let Err(e) = url::Url::parse(&sentiment_model_url) {
            return Err(ConfigError::InvalidModelUrl {
                url: sentiment_model_url,
                reason: e.to_string(),
            });
        }

        if sentiment_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfiguration {
                details: "sentiment timeout must be at least one second".to_string(),
            });
        }

        let hf_api_token = hf_api_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        if hf_api_token.is_none() {
            debug!("No inference API token configured; sentiment calls will be unauthenticated");
        }

        Ok(Self {
            address,
            sentiment_model_url,
            hf_api_token,
            sentiment_timeout_secs,
        })
    }

    /// Resolve the token from an explicit value, falling back to [`LEGACY_TOKEN_ENV`].
    ///
    /// Both names refer to the same credential.
    pub fn resolve_token(explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|t| !t.trim().is_empty())
            .or_else(|| std::env::var(LEGACY_TOKEN_ENV).ok())
    }

    pub fn sentiment_timeout(&self) -> Duration {
        Duration::from_secs(self.sentiment_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            sentiment_model_url: DEFAULT_SENTIMENT_MODEL_URL.to_string(),
            hf_api_token: None,
            sentiment_timeout_secs: DEFAULT_SENTIMENT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("address", &self.address)
            .field("sentiment_model_url", &self.sentiment_model_url)
            .field("hf_api_token", &self.hf_api_token.as_ref().map(|_| "<redacted>"))
            .field("sentiment_timeout_secs", &self.sentiment_timeout_secs)
            .finish()
    }
}
