//! Sentiment classification for onboarding session comments.
//!
//! A [`SentimentService`] wraps a [`SentimentProvider`] (the Hugging Face
//! Inference API in production) and always yields one of
//! `positive`, `negative` or `neutral`.

pub mod error;
pub mod huggingface_provider;
pub mod label;
pub mod provider;
pub mod service;

pub use error::{SentimentError, SentimentResult};
pub use huggingface_provider::HuggingFaceSentimentProvider;
pub use label::SentimentLabel;
pub use provider::SentimentProvider;
pub use service::{SentimentService, SentimentStats};
