use std::collections::BTreeMap;

use axum::http::header::{HeaderValue, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Problem body returned to clients, following RFC 7807.
///
/// Only used for OpenAPI documentation; handlers build [`Problem`] values.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(example = json!({
    "type": "https://dropoff.dev/probs/bad-request",
    "title": "Malformed request body",
    "detail": "Failed to parse the request body as JSON",
    "instance": "/error/bad-request"
}))]
pub struct ProblemDetails {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_url: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[schema(additional_properties = true)]
    pub extensions: BTreeMap<String, Value>,
}

/// An error response sent as `application/problem+json`.
#[derive(Debug, Clone)]
pub struct Problem {
    pub status_code: StatusCode,
    pub body: BTreeMap<String, Value>,
}

/// Create a new `Problem` with an empty body.
pub fn new<S>(status_code: S) -> Problem
where
    S: Into<StatusCode>,
{
    Problem {
        status_code: status_code.into(),
        body: BTreeMap::new(),
    }
}

impl Problem {
    pub fn with_type<S>(self, value: S) -> Self
    where
        S: Into<String>,
    {
        self.with_value("type", value.into())
    }

    pub fn with_title<S>(self, value: S) -> Self
    where
        S: Into<String>,
    {
        self.with_value("title", value.into())
    }

    pub fn with_detail<S>(self, value: S) -> Self
    where
        S: Into<String>,
    {
        self.with_value("detail", value.into())
    }

    pub fn with_instance<S>(self, value: S) -> Self
    where
        S: Into<String>,
    {
        self.with_value("instance", value.into())
    }

    /// Insert an arbitrary member into the problem body.
    pub fn with_value<V>(mut self, key: &str, value: V) -> Self
    where
        V: Into<Value>,
    {
        self.body.insert(key.to_owned(), value.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> axum::response::Response {
        if self.body.is_empty() {
            return self.status_code.into_response();
        }

        let mut response = (self.status_code, Json(self.body)).into_response();
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_problem_has_no_body_content_type() {
        let response = new(StatusCode::NOT_FOUND).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_problem_uses_problem_json() {
        let response = new(StatusCode::BAD_REQUEST)
            .with_title("Bad Request")
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
    }
}
