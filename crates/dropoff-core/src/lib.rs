//! Core types shared across all drop-off analyzer crates

pub mod error_builder;
pub mod openapi;
pub mod problemdetails;
pub mod types;

pub use error_builder::*;
pub use problemdetails::{Problem, ProblemDetails};
pub use types::FunnelStep;

// Re-export external dependencies
pub use serde;
pub use serde_json;
