use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Three-way sentiment assigned to a session comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Map a raw upstream label, case-insensitively. Anything other than
    /// `positive` or `negative` is neutral.
    pub fn from_upstream(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
