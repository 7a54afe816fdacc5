//! Mock observation series for the dashboard overview
//!
//! The overview chart is fed with generated data rather than real
//! measurements, matching the rest of the dashboard's illustrative content.

use chrono::{Duration, NaiveDate};
use rand::RngExt;

use crate::models::DailyObservation;
use crate::uv::UV_INDEX_MAX;

/// Center of the mock temperature band in Celsius
pub const TEMPERATURE_MEAN_C: f64 = 25.0;

/// Half-width of the mock temperature band in Celsius
pub const TEMPERATURE_SPREAD_C: f64 = 5.0;

/// Generate one mock observation per day, starting at `start`
#[must_use]
pub fn generate_observations<R: RngExt>(
    start: NaiveDate,
    days: u32,
    rng: &mut R,
) -> Vec<DailyObservation> {
    (0..days)
        .map(|offset| DailyObservation {
            date: start + Duration::days(i64::from(offset)),
            uv_index: rng.random_range(0.0..UV_INDEX_MAX),
            temperature: TEMPERATURE_MEAN_C
                + rng.random_range(-TEMPERATURE_SPREAD_C..TEMPERATURE_SPREAD_C),
        })
        .collect()
}
