//! Report delivery
//!
//! Delivery to Slack or Notion is not wired up; the endpoint acknowledges
//! every request without contacting anything.

mod handler;

pub use handler::{configure_routes, ReportApiDoc, SendReportResponse};
