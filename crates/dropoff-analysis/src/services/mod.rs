mod insights;

pub use insights::{default_funnel, InsightService, Insights};
