//! UV index estimation from environmental readings
//!
//! Models irradiance as a triangular daylight-peak factor centered on solar
//! noon, attenuated by a linear clear-sky factor derived from cloud cover.

use serde::{Deserialize, Serialize};

use crate::models::EnvironmentalReading;

/// Upper bound of the UV index scale
pub const UV_INDEX_MAX: f64 = 12.0;

/// Hour of day at which the daylight-peak factor is maximal
pub const SOLAR_NOON_HOUR: f64 = 12.0;

/// Base value of the triangular daylight-peak factor
pub const DAYLIGHT_PEAK_BASE: f64 = 24.0;

/// Estimated UV index for a single reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvEstimate {
    /// Estimated UV index, clamped to the 0-12 scale
    pub value: f64,
}

/// Estimate the UV index for an environmental reading
///
/// Total over the declared input domain. The product of the two factors is
/// clamped to the UV scale, so extreme inputs degrade to the scale
/// boundaries instead of producing out-of-range values.
#[must_use]
pub fn estimate(reading: &EnvironmentalReading) -> UvEstimate {
    let raw =
        daylight_peak_factor(reading.hour_of_day) * clear_sky_factor(reading.cloud_cover_pct);

    UvEstimate {
        value: raw.clamp(0.0, UV_INDEX_MAX),
    }
}

/// Triangular daylight factor, maximal at solar noon
fn daylight_peak_factor(hour_of_day: u8) -> f64 {
    DAYLIGHT_PEAK_BASE - (f64::from(hour_of_day) - SOLAR_NOON_HOUR).abs()
}

/// Fraction of clear-sky irradiance assumed to reach the ground
fn clear_sky_factor(cloud_cover_pct: f64) -> f64 {
    (100.0 - cloud_cover_pct) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngExt;

    fn estimate_for(cloud_cover_pct: f64, hour_of_day: u8) -> f64 {
        estimate(&EnvironmentalReading::new(cloud_cover_pct, hour_of_day)).value
    }

    #[test]
    fn test_full_overcast_gives_zero_at_any_hour() {
        for hour in 0..24 {
            assert_eq!(estimate_for(100.0, hour), 0.0);
        }
    }

    #[test]
    fn test_clear_sky_at_noon_clamps_to_scale_max() {
        // Daylight factor peaks at 24 for hour 12, so the raw product is
        // 24 * 1.0 and the clamp brings it back to 12.
        assert_eq!(estimate_for(0.0, 12), UV_INDEX_MAX);
    }

    #[test]
    fn test_day_boundary_hours() {
        // Hour 0 has a daylight factor of 12 (no clamping), hour 23 a factor
        // of 13 (clamped under clear sky). Both land on 12 at 0% cloud.
        assert_eq!(estimate_for(0.0, 0), 12.0);
        assert_eq!(estimate_for(0.0, 23), 12.0);

        // Under 50% cloud the pre-clamp asymmetry becomes observable.
        assert_eq!(estimate_for(50.0, 0), 6.0);
        assert_eq!(estimate_for(50.0, 23), 6.5);
    }

    #[test]
    fn test_estimate_always_within_uv_scale() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let cloud_cover_pct: f64 = rng.random_range(0.0..=100.0);
            let hour_of_day: u8 = rng.random_range(0..24);
            let value = estimate_for(cloud_cover_pct, hour_of_day);
            assert!(
                (0.0..=UV_INDEX_MAX).contains(&value),
                "estimate {value} out of range for {cloud_cover_pct}% at hour {hour_of_day}"
            );
        }
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let reading = EnvironmentalReading::new(37.5, 15);
        let first = estimate(&reading);
        for _ in 0..10 {
            assert_eq!(estimate(&reading), first);
        }
    }
}
