//! JSON API consumed by the dashboard frontend

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use chrono::{Duration, NaiveDate, Utc};
use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::{
    UvDashError,
    config::DashboardConfig,
    models::{DailyObservation, EnvironmentalReading},
    series,
    uv::{ConfidenceScore, UV_INDEX_MAX, UvTier, classify, estimate},
};

/// Headline metrics pinned on the overview page
const OVERVIEW_METRICS: [(&str, &str, &str); 3] = [
    ("Temperature", "24°C", "1.2°C"),
    ("UV Index", "6.8", "-0.5"),
    ("Cloud Cover", "65%", "12%"),
];

/// Gauge bands for the UV tracker display
const GAUGE_BANDS: [(f64, f64, &str); 5] = [
    (0.0, 3.0, "lightgreen"),
    (3.0, 6.0, "yellow"),
    (6.0, 8.0, "orange"),
    (8.0, 11.0, "red"),
    (11.0, 12.0, "purple"),
];

#[derive(Serialize, Deserialize)]
pub struct ApiMetric {
    pub label: String,
    pub value: String,
    pub delta: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiObservation {
    pub date: NaiveDate,
    pub uv_index: f64,
    pub temperature: f64,
}

impl From<&DailyObservation> for ApiObservation {
    fn from(observation: &DailyObservation) -> Self {
        Self {
            date: observation.date,
            uv_index: observation.uv_index,
            temperature: observation.temperature,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiOverview {
    pub metrics: Vec<ApiMetric>,
    pub series: Vec<ApiObservation>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiGaugeBand {
    pub start: f64,
    pub end: f64,
    pub color: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiUvReport {
    pub value: f64,
    pub tier: UvTier,
    pub recommendation: String,
    pub bands: Vec<ApiGaugeBand>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiPrediction {
    pub uv_index: f64,
    pub tier: UvTier,
    pub recommendation: String,
    pub confidence: f64,
}

/// Query parameters of the prediction endpoint
///
/// Missing parameters fall back to the configured slider defaults.
#[derive(Debug, Deserialize)]
pub struct PredictionParams {
    pub cloud_cover: Option<f64>,
    pub hour: Option<u8>,
}

impl PredictionParams {
    /// Resolve the parameters into a reading, enforcing the input ranges the
    /// dashboard sliders would
    fn resolve(&self, defaults: &DashboardConfig) -> crate::Result<EnvironmentalReading> {
        let cloud_cover_pct = self.cloud_cover.unwrap_or(defaults.cloud_cover_pct);
        let hour_of_day = self.hour.unwrap_or(defaults.hour_of_day);

        if !(0.0..=100.0).contains(&cloud_cover_pct) {
            return Err(UvDashError::validation(format!(
                "cloud_cover must be between 0 and 100, got {cloud_cover_pct}"
            )));
        }

        if hour_of_day > 23 {
            return Err(UvDashError::validation(format!(
                "hour must be between 0 and 23, got {hour_of_day}"
            )));
        }

        Ok(EnvironmentalReading::new(cloud_cover_pct, hour_of_day))
    }
}

pub fn router(defaults: DashboardConfig) -> Router {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/uv/current", get(get_current_uv))
        .route("/uv/predict", get(get_prediction))
        .with_state(defaults)
}

async fn get_overview(State(defaults): State<DashboardConfig>) -> Json<ApiOverview> {
    let start = Utc::now().date_naive() - Duration::days(i64::from(defaults.series_days));
    let observations =
        series::generate_observations(start, defaults.series_days, &mut rand::rng());

    let metrics = OVERVIEW_METRICS
        .iter()
        .map(|(label, value, delta)| ApiMetric {
            label: (*label).to_string(),
            value: (*value).to_string(),
            delta: (*delta).to_string(),
        })
        .collect();

    Json(ApiOverview {
        metrics,
        series: observations.iter().map(ApiObservation::from).collect(),
    })
}

async fn get_current_uv() -> Json<ApiUvReport> {
    let value = rand::rng().random_range(0.0..UV_INDEX_MAX);
    let tier = classify(value);

    Json(ApiUvReport {
        value,
        tier,
        recommendation: tier.recommendation().to_string(),
        bands: GAUGE_BANDS
            .iter()
            .map(|(start, end, color)| ApiGaugeBand {
                start: *start,
                end: *end,
                color: (*color).to_string(),
            })
            .collect(),
    })
}

async fn get_prediction(
    State(defaults): State<DashboardConfig>,
    Query(params): Query<PredictionParams>,
) -> Result<Json<ApiPrediction>, StatusCode> {
    let reading = params.resolve(&defaults).map_err(|err| {
        tracing::debug!("rejecting prediction request: {err}");
        StatusCode::BAD_REQUEST
    })?;

    let uv_estimate = estimate(&reading);
    let tier = classify(uv_estimate.value);
    let confidence = ConfidenceScore::sample(&mut rand::rng());
    tracing::debug!(
        "predicted UV {:.2} for {}",
        uv_estimate.value,
        reading.format_summary()
    );

    Ok(Json(ApiPrediction {
        uv_index: uv_estimate.value,
        tier,
        recommendation: tier.recommendation().to_string(),
        confidence: confidence.value,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_fall_back_to_defaults() {
        let params = PredictionParams {
            cloud_cover: None,
            hour: None,
        };
        let reading = params.resolve(&DashboardConfig::default()).unwrap();
        assert_eq!(reading.cloud_cover_pct, 50.0);
        assert_eq!(reading.hour_of_day, 12);
    }

    #[test]
    fn test_params_reject_out_of_range_cloud_cover() {
        let params = PredictionParams {
            cloud_cover: Some(150.0),
            hour: Some(12),
        };
        let err = params.resolve(&DashboardConfig::default()).unwrap_err();
        assert!(matches!(err, UvDashError::Validation { .. }));
    }

    #[test]
    fn test_params_reject_out_of_range_hour() {
        let params = PredictionParams {
            cloud_cover: Some(20.0),
            hour: Some(24),
        };
        let err = params.resolve(&DashboardConfig::default()).unwrap_err();
        assert!(matches!(err, UvDashError::Validation { .. }));
    }
}
