//! Onboarding drop-off analysis
//!
//! Summarizes a funnel, attaches insights and recommendations, and labels
//! the sentiment of each session comment.

pub mod handlers;
pub mod services;

pub use handlers::handler::{configure_routes, AnalysisApiDoc};
pub use handlers::types::AppState;
pub use services::{InsightService, Insights};
