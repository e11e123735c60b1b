//! Session data ingestion
//!
//! Accepts uploaded onboarding session data and echoes it back. Nothing is
//! stored.

mod handler;

pub use handler::{configure_routes, IngestApiDoc, UploadResponse};
