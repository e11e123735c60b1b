use dropoff_core::FunnelStep;
use dropoff_sentiment::{SentimentLabel, SentimentService, SentimentStats};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::InsightService;

pub struct AppState {
    pub insight_service: Arc<InsightService>,
    pub sentiment_service: Arc<SentimentService>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DropoffAnalysisRequest {
    /// Funnel steps in display order; the default funnel is used when absent or empty
    #[serde(default)]
    pub funnel: Option<Vec<FunnelStep>>,
    /// Free-text session comments to label
    #[serde(default)]
    pub user_sessions: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SentimentEntry {
    pub text: String,
    pub sentiment: SentimentLabel,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InsightsResponse {
    pub funnel: Vec<FunnelStep>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub sentiment: Vec<SentimentEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SentimentStatsResponse {
    pub provider: String,
    #[serde(flatten)]
    pub stats: SentimentStats,
}
