//! Sentiment Provider Trait

use crate::error::SentimentResult;
use async_trait::async_trait;

/// A backend that assigns a raw label to a piece of free text.
///
/// Label normalization and the fallback policy live in
/// [`SentimentService`](crate::SentimentService), so implementations only
/// report what the backend said, or why it could not say anything.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Classify `text` and return the backend's label verbatim
    async fn classify(&self, text: &str) -> SentimentResult<String>;

    /// Name of this provider (for logging)
    fn provider_name(&self) -> &'static str;
}
