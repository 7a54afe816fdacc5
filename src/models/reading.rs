//! Environmental reading model for UV estimation inputs

use serde::{Deserialize, Serialize};

/// A single environmental reading fed into the UV estimator
///
/// Callers are responsible for keeping the fields inside their documented
/// ranges; the dashboard controls enforce this at the boundary.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EnvironmentalReading {
    /// Cloud cover percentage (0-100)
    pub cloud_cover_pct: f64,
    /// Hour of day (0-23)
    pub hour_of_day: u8,
}

impl EnvironmentalReading {
    /// Create a new reading
    #[must_use]
    pub fn new(cloud_cover_pct: f64, hour_of_day: u8) -> Self {
        Self {
            cloud_cover_pct,
            hour_of_day,
        }
    }

    /// Format the reading for display and log lines
    #[must_use]
    pub fn format_summary(&self) -> String {
        format!(
            "{:.0}% cloud cover at {:02}:00",
            self.cloud_cover_pct, self.hour_of_day
        )
    }
}
