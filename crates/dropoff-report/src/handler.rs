use axum::{response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{OpenApi, ToSchema};

pub const REPORT_SENT_MESSAGE: &str = "Report sent (stub)!";

#[derive(OpenApi)]
#[openapi(
    paths(send_report),
    components(schemas(SendReportResponse)),
    tags(
        (name = "Report", description = "Summary report delivery")
    )
)]
pub struct ReportApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendReportResponse {
    pub message: String,
}

pub fn configure_routes() -> Router {
    Router::new().route("/report/send", post(send_report))
}

/// Send summary report
///
/// Always succeeds; any request body is ignored.
#[utoipa::path(
    post,
    path = "/report/send",
    responses(
        (status = 200, description = "Report accepted", body = SendReportResponse)
    ),
    tag = "Report"
)]
pub async fn send_report() -> Json<SendReportResponse> {
    // TODO: deliver through a Slack webhook or the Notion API once credentials are configurable
    info!("Report delivery requested; no delivery channel configured");
    Json(SendReportResponse {
        message: REPORT_SENT_MESSAGE.to_string(),
    })
}
