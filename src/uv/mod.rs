//! UV index estimation and classification
//!
//! This module provides the dashboard's computational core:
//! - Estimation of a UV index from cloud cover and hour of day
//! - Classification of UV values into protection tiers
//! - Decorative confidence sampling for the prediction panel

pub mod classifier;
pub mod confidence;
pub mod estimator;

// Re-export commonly used types from submodules
pub use classifier::{HIGH_THRESHOLD, MODERATE_THRESHOLD, UvTier, classify};
pub use confidence::{CONFIDENCE_MAX, CONFIDENCE_MIN, ConfidenceScore};
pub use estimator::{UV_INDEX_MAX, UvEstimate, estimate};
