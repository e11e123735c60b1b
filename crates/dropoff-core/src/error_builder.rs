use crate::problemdetails;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Serialize;
use std::collections::HashMap;

pub struct ErrorBuilder {
    status: StatusCode,
    type_: String,
    title: String,
    detail: String,
    instance: String,
    values: HashMap<String, serde_json::Value>,
}

impl ErrorBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            type_: String::new(),
            title: String::new(),
            detail: String::new(),
            instance: String::new(),
            values: HashMap::new(),
        }
    }

    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = type_.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = instance.into();
        self
    }

    pub fn value<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.values.insert(key.to_string(), value);
        }
        self
    }

    pub fn build(self) -> problemdetails::Problem {
        let mut problem = problemdetails::new(self.status)
            .with_type(self.type_)
            .with_title(self.title)
            .with_detail(self.detail)
            .with_instance(self.instance)
            .with_value("timestamp", chrono::Utc::now().to_rfc3339());

        for (key, value) in self.values {
            problem = problem.with_value(&key, value);
        }

        problem
    }
}

/// Problem for a request body the `Json` extractor refused.
///
/// Keeps the extractor's status (400, 415 or 422) so clients can tell a
/// missing content type from unparseable JSON.
pub fn malformed_body(rejection: JsonRejection) -> problemdetails::Problem {
    ErrorBuilder::new(rejection.status())
        .type_("https://dropoff.dev/probs/malformed-body")
        .title("Malformed request body")
        .detail(rejection.body_text())
        .instance("/error/malformed-body")
        .value("error_code", "MALFORMED_BODY")
        .build()
}

/// Problem for a JSON body that parsed but does not have the expected shape.
pub fn unprocessable_body(detail: impl Into<String>) -> problemdetails::Problem {
    ErrorBuilder::new(StatusCode::UNPROCESSABLE_ENTITY)
        .type_("https://dropoff.dev/probs/malformed-body")
        .title("Malformed request body")
        .detail(detail)
        .instance("/error/malformed-body")
        .value("error_code", "MALFORMED_BODY")
        .build()
}
