//! Hugging Face Inference API provider
//!
//! Posts `{"inputs": <text>}` to a text-classification model endpoint and
//! reads the label of the first prediction.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use dropoff_config::ServerConfig;

use crate::error::{SentimentError, SentimentResult};
use crate::provider::SentimentProvider;

pub struct HuggingFaceSentimentProvider {
    model_url: String,
    api_token: Option<String>,
    client: Client,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

impl HuggingFaceSentimentProvider {
    pub fn new(
        model_url: String,
        api_token: Option<String>,
        timeout: Duration,
    ) -> SentimentResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SentimentError::Client(e.to_string()))?;

        Ok(Self {
            model_url,
            api_token,
            client,
        })
    }

    pub fn from_config(config: &ServerConfig) -> SentimentResult<Self> {
        Self::new(
            config.sentiment_model_url.clone(),
            config.hf_api_token.clone(),
            config.sentiment_timeout(),
        )
    }
}

/// Pull the first prediction's label out of an inference response.
///
/// Accepts `[{"label": ..}, ..]` and the batched `[[{"label": ..}, ..]]`
/// form the hosted API returns for single inputs.
fn first_label(body: &Value) -> SentimentResult<String> {
    let first = body
        .as_array()
        .and_then(|predictions| predictions.first())
        .ok_or_else(|| SentimentError::InvalidResponse("expected a non-empty array".to_string()))?;

    let prediction = match first {
        Value::Array(inner) => inner.first().ok_or_else(|| {
            SentimentError::InvalidResponse("empty prediction batch".to_string())
        })?,
        other => other,
    };

    prediction
        .get("label")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SentimentError::InvalidResponse("prediction has no string label".to_string()))
}

#[async_trait]
impl SentimentProvider for HuggingFaceSentimentProvider {
    async fn classify(&self, text: &str) -> SentimentResult<String> {
        debug!(
            "Classifying {} chars with inference API at {}",
            text.len(),
            self.model_url
        );

        let mut request = self
            .client
            .post(&self.model_url)
            .json(&InferenceRequest { inputs: text });

        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SentimentError::HttpRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SentimentError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SentimentError::InvalidResponse(e.to_string()))?;

        first_label(&body)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }
}
