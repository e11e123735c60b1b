use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dropoff_analysis::{AnalysisApiDoc, InsightService};
use dropoff_core::openapi::merge_openapi_schemas;
use dropoff_ingest::IngestApiDoc;
use dropoff_report::ReportApiDoc;
use dropoff_sentiment::SentimentService;

pub const LIVENESS_MESSAGE: &str = "Onboarding Drop-Off Analyzer Backend Running!";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Onboarding Drop-Off Analyzer API",
        description = "Funnel drop-off insights and session comment sentiment"
    ),
    servers((url = "/api"))
)]
struct BaseApiDoc;

fn openapi() -> utoipa::openapi::OpenApi {
    merge_openapi_schemas(
        BaseApiDoc::openapi(),
        vec![
            AnalysisApiDoc::openapi(),
            IngestApiDoc::openapi(),
            ReportApiDoc::openapi(),
        ],
    )
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Assemble every route under `/api`, plus liveness and API docs.
pub fn build_application(sentiment_service: Arc<SentimentService>) -> Router {
    let analysis_state = Arc::new(dropoff_analysis::AppState {
        insight_service: Arc::new(InsightService::new()),
        sentiment_service,
    });

    let api_router = Router::new()
        .merge(dropoff_analysis::configure_routes().with_state(analysis_state))
        .merge(dropoff_ingest::configure_routes())
        .merge(dropoff_report::configure_routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(liveness))
        .nest("/api", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use dropoff_sentiment::{SentimentProvider, SentimentResult};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    struct FixedProvider;

    #[async_trait]
    impl SentimentProvider for FixedProvider {
        async fn classify(&self, _text: &str) -> SentimentResult<String> {
            Ok("POSITIVE".to_string())
        }

        fn provider_name(&self) -> &'static str {
            "fixed"
        }
    }

    fn app() -> Router {
        build_application(Arc::new(SentimentService::new(Arc::new(FixedProvider))))
    }

    async fn read_body(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_liveness() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_body(response).await, LIVENESS_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_routes_are_mounted_under_api() {
        let response = app()
            .oneshot(post_json(
                "/api/analysis/dropoff",
                json!({"user_sessions": ["", "great app!"]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(body["funnel"].as_array().unwrap().len(), 3);
        assert_eq!(body["sentiment"][0]["sentiment"], "neutral");
        assert_eq!(body["sentiment"][1]["sentiment"], "positive");

        let response = app()
            .oneshot(post_json("/api/ingest/upload", json!({"a": 1})))
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(body, json!({"message": "Data received!", "data": {"a": 1}}));

        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/report/send")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(body, json!({"message": "Report sent (stub)!"}));
    }

    #[tokio::test]
    async fn test_unprefixed_routes_are_not_found() {
        let response = app()
            .oneshot(post_json("/analysis/dropoff", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/report/send")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/analysis/dropoff")
                    .header("origin", "https://dashboard.example.com")
                    .header("access-control-request-method", "POST")
                    .header("access-control-request-headers", "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }

    #[test]
    fn test_openapi_contains_all_routes() {
        let doc = openapi();
        for path in [
            "/analysis/dropoff",
            "/analysis/sentiment/stats",
            "/ingest/upload",
            "/report/send",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(body["servers"][0]["url"], "/api");
    }
}
