//! Sentiment Service
//!
//! Applies the classification policy on top of a [`SentimentProvider`]:
//! blank comments are neutral without a call, and every provider failure
//! degrades to neutral. Failures never reach the caller; they are logged
//! and counted instead.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use utoipa::ToSchema;

use dropoff_config::ServerConfig;

use crate::error::SentimentResult;
use crate::huggingface_provider::HuggingFaceSentimentProvider;
use crate::label::SentimentLabel;
use crate::provider::SentimentProvider;

/// Process-lifetime classification counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SentimentStats {
    /// Comments labelled from a successful provider response
    pub classified: u64,
    /// Blank comments answered without calling the provider
    pub short_circuited: u64,
    /// Provider failures degraded to neutral
    pub fallbacks: u64,
}

pub struct SentimentService {
    provider: Arc<dyn SentimentProvider>,
    classified: AtomicU64,
    short_circuited: AtomicU64,
    fallbacks: AtomicU64,
}

impl SentimentService {
    pub fn new(provider: Arc<dyn SentimentProvider>) -> Self {
        Self {
            provider,
            classified: AtomicU64::new(0),
            short_circuited: AtomicU64::new(0),
            fallbacks: AtomicU64::new(0),
        }
    }

    /// Build the service around the Hugging Face provider described by `config`
    pub fn from_config(config: &ServerConfig) -> SentimentResult<Self> {
        let provider = HuggingFaceSentimentProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider)))
    }

    /// Label one comment. Never fails.
    pub async fn classify(&self, text: &str) -> SentimentLabel {
        if text.trim().is_empty() {
            self.short_circuited.fetch_add(1, Ordering::Relaxed);
            return SentimentLabel::Neutral;
        }

        match self.provider.classify(text).await {
            Ok(raw) => {
                self.classified.fetch_add(1, Ordering::Relaxed);
                let label = SentimentLabel::from_upstream(&raw);
                debug!(
                    "Provider {} labelled comment as {} (raw: {})",
                    self.provider.provider_name(),
                    label,
                    raw
                );
                label
            }
            Err(e) => {
                self.fallbacks.fetch_add(1, Ordering::Relaxed);
                warn!(
                    "Sentiment provider {} failed, falling back to neutral: {}",
                    self.provider.provider_name(),
                    e
                );
                SentimentLabel::Neutral
            }
        }
    }

    /// Label each comment in order, one provider call at a time
    pub async fn classify_all<'a, I>(&self, texts: I) -> Vec<SentimentLabel>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut labels = Vec::new();
        for text in texts {
            labels.push(self.classify(text).await);
        }
        labels
    }

    pub fn stats(&self) -> SentimentStats {
        SentimentStats {
            classified: self.classified.load(Ordering::Relaxed),
            short_circuited: self.short_circuited.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }
}
