//! UV protection tier classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound of the Moderate tier (inclusive)
pub const MODERATE_THRESHOLD: f64 = 3.0;

/// Lower bound of the High tier (inclusive)
pub const HIGH_THRESHOLD: f64 = 6.0;

/// Protection tier derived from a UV index value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UvTier {
    /// UV below 3
    Low,
    /// UV from 3 up to 6
    Moderate,
    /// UV of 6 and above
    High,
}

/// Classify a UV value into its protection tier
///
/// Total over all values; anything below the Moderate threshold is Low,
/// including values under the UV scale floor.
#[must_use]
pub fn classify(uv_value: f64) -> UvTier {
    match uv_value {
        v if v < MODERATE_THRESHOLD => UvTier::Low,
        v if v < HIGH_THRESHOLD => UvTier::Moderate,
        _ => UvTier::High,
    }
}

impl UvTier {
    /// Protection recommendation shown next to the tier
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        match self {
            UvTier::Low => "Basic sun protection required.",
            UvTier::Moderate => "Take precautions.",
            UvTier::High => "Maximum protection required.",
        }
    }
}

impl fmt::Display for UvTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UvTier::Low => write!(f, "Low"),
            UvTier::Moderate => write!(f, "Moderate"),
            UvTier::High => write!(f, "High"),
        }
    }
}
