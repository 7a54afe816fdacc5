//! Decorative prediction-confidence sampling
//!
//! The confidence value is display garnish for the prediction panel. It is
//! drawn independently of the estimate and carries no statistical meaning.

use rand::RngExt;
use serde::{Deserialize, Serialize};

/// Lower bound of the confidence range (inclusive)
pub const CONFIDENCE_MIN: f64 = 0.70;

/// Upper bound of the confidence range (exclusive)
pub const CONFIDENCE_MAX: f64 = 0.99;

/// Bounded pseudo-random confidence score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScore {
    /// Confidence in [0.70, 0.99)
    pub value: f64,
}

impl ConfidenceScore {
    /// Draw a confidence score from the supplied generator
    #[must_use]
    pub fn sample<R: RngExt>(rng: &mut R) -> Self {
        Self {
            value: rng.random_range(CONFIDENCE_MIN..CONFIDENCE_MAX),
        }
    }

    /// Confidence as a display percentage
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.value * 100.0
    }
}
