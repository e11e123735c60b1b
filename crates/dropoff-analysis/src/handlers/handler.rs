use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use dropoff_core::error_builder::{malformed_body, unprocessable_body};
use dropoff_core::problemdetails::Problem;
use dropoff_core::{FunnelStep, ProblemDetails};
use dropoff_sentiment::{SentimentLabel, SentimentStats};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::OpenApi;

use super::types::{
    AppState, DropoffAnalysisRequest, InsightsResponse, SentimentEntry, SentimentStatsResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(analyze_dropoff, get_sentiment_stats),
    components(schemas(
        DropoffAnalysisRequest,
        InsightsResponse,
        SentimentEntry,
        SentimentLabel,
        SentimentStats,
        SentimentStatsResponse,
        FunnelStep,
        ProblemDetails,
    )),
    tags(
        (name = "Analysis", description = "Funnel drop-off analysis and comment sentiment")
    )
)]
pub struct AnalysisApiDoc;

pub fn configure_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analysis/dropoff", post(analyze_dropoff))
        .route("/analysis/sentiment/stats", get(get_sentiment_stats))
}

/// Analyze onboarding drop-off
///
/// Returns the funnel, insights, recommendations and one sentiment label per
/// session comment, in input order.
#[utoipa::path(
    post,
    path = "/analysis/dropoff",
    request_body = DropoffAnalysisRequest,
    responses(
        (status = 200, description = "Analysis completed", body = InsightsResponse),
        (status = 400, description = "Malformed request body", body = ProblemDetails),
        (status = 415, description = "Body is not JSON", body = ProblemDetails),
        (status = 422, description = "Body has the wrong shape", body = ProblemDetails)
    ),
    tag = "Analysis"
)]
pub async fn analyze_dropoff(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InsightsResponse>, Problem> {
    let Json(body) = payload.map_err(malformed_body)?;
    if !body.is_object() {
        return Err(unprocessable_body("expected a JSON object"));
    }
    let request: DropoffAnalysisRequest =
        serde_json::from_value(body).map_err(|e| unprocessable_body(e.to_string()))?;

    let sessions = request.user_sessions.unwrap_or_default();
    let insights = state.insight_service.generate(request.funnel, &sessions);

    debug!("Labelling {} session comments", sessions.len());
    let labels = state
        .sentiment_service
        .classify_all(sessions.iter().map(String::as_str))
        .await;

    let sentiment = sessions
        .into_iter()
        .zip(labels)
        .map(|(text, sentiment)| SentimentEntry { text, sentiment })
        .collect::<Vec<_>>();

    info!(
        "Analyzed funnel with {} steps and {} comments",
        insights.funnel.len(),
        sentiment.len()
    );

    Ok(Json(InsightsResponse {
        funnel: insights.funnel,
        insights: insights.insights,
        recommendations: insights.recommendations,
        sentiment,
    }))
}

/// Sentiment classification counters
///
/// Shows how many comments were labelled, skipped as blank, or degraded to
/// neutral after a provider failure since the process started.
#[utoipa::path(
    get,
    path = "/analysis/sentiment/stats",
    responses(
        (status = 200, description = "Current counters", body = SentimentStatsResponse)
    ),
    tag = "Analysis"
)]
pub async fn get_sentiment_stats(State(state): State<Arc<AppState>>) -> Json<SentimentStatsResponse> {
    Json(SentimentStatsResponse {
        provider: state.sentiment_service.provider_name().to_string(),
        stats: state.sentiment_service.stats(),
    })
}
