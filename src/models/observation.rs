//! Daily observation rows backing the dashboard overview chart

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of mock dashboard observations
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyObservation {
    /// Observation date
    pub date: NaiveDate,
    /// Mock UV index sample (0-12)
    pub uv_index: f64,
    /// Mock air temperature in Celsius
    pub temperature: f64,
}
