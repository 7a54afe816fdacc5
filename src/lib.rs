//! `UVDash` - Mock UV index tracking and prediction dashboard
//!
//! This library provides the core functionality for UV index estimation,
//! protection-tier classification, and the JSON API backing the dashboard.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod series;
pub mod uv;
pub mod web;

// Re-export core types for public API
pub use config::UvDashConfig;
pub use error::UvDashError;
pub use models::{DailyObservation, EnvironmentalReading};
pub use uv::{ConfidenceScore, UvEstimate, UvTier, classify, estimate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, UvDashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
