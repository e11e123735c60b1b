mod service;

pub use service::{
    ConfigError, ServerConfig, DEFAULT_ADDRESS, DEFAULT_SENTIMENT_MODEL_URL,
    DEFAULT_SENTIMENT_TIMEOUT_SECS, LEGACY_TOKEN_ENV,
};
