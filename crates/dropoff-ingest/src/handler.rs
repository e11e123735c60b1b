use axum::{extract::rejection::JsonRejection, response::Json, routing::post, Router};
use dropoff_core::error_builder::malformed_body;
use dropoff_core::problemdetails::Problem;
use dropoff_core::ProblemDetails;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::{OpenApi, ToSchema};

pub const UPLOAD_RECEIVED_MESSAGE: &str = "Data received!";

#[derive(OpenApi)]
#[openapi(
    paths(upload_data),
    components(schemas(UploadResponse, ProblemDetails)),
    tags(
        (name = "Ingestion", description = "Session data upload")
    )
)]
pub struct IngestApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    #[schema(example = "Data received!")]
    pub message: String,
    /// The uploaded body, unchanged
    #[schema(value_type = Object)]
    pub data: Value,
}

pub fn configure_routes() -> Router {
    Router::new().route("/ingest/upload", post(upload_data))
}

/// Upload session data
///
/// Echoes the JSON body back under `data`.
#[utoipa::path(
    post,
    path = "/ingest/upload",
    request_body(content = Object, description = "Any JSON document"),
    responses(
        (status = 200, description = "Data received", body = UploadResponse),
        (status = 400, description = "Malformed request body", body = ProblemDetails),
        (status = 415, description = "Body is not JSON", body = ProblemDetails)
    ),
    tag = "Ingestion"
)]
pub async fn upload_data(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UploadResponse>, Problem> {
    let Json(data) = payload.map_err(malformed_body)?;
    match data.as_object() {
        Some(fields) => debug!("Received upload with {} top-level fields", fields.len()),
        None => debug!("Received non-object upload"),
    }

    Ok(Json(UploadResponse {
        message: UPLOAD_RECEIVED_MESSAGE.to_string(),
        data,
    }))
}
