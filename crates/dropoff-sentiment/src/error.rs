//! Sentiment classification error types

use thiserror::Error;

pub type SentimentResult<T> = Result<T, SentimentError>;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("HTTP request failed: {0}")]
    HttpRequest(String),

    #[error("Inference API returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Unexpected inference API response: {0}")]
    InvalidResponse(String),
}
