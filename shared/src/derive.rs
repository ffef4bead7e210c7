//! Metrics derived from the raw telemetry series

use thiserror::Error;

use crate::models::{DashboardPayload, RainfallForecastDay, SoilMoistureSample};

/// A payload the dashboard cannot be derived from
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DerivationError {
    #[error("soil moisture series is empty")]
    EmptySoilMoisture,

    #[error("rainfall forecast is empty")]
    EmptyRainfallForecast,
}

/// Derived values the summary cards are built from
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics<'a> {
    pub current_moisture: &'a SoilMoistureSample,
    pub total_rainfall_mm: f64,
}

/// Latest reading, taken by position. The backend orders the series
/// oldest to newest; dates are not compared.
pub fn current_moisture(samples: &[SoilMoistureSample]) -> Result<&SoilMoistureSample, DerivationError> {
    samples.last().ok_or(DerivationError::EmptySoilMoisture)
}

/// Sum of forecast rainfall over every forecast day
pub fn total_rainfall(forecast: &[RainfallForecastDay]) -> f64 {
    forecast.iter().map(|day| day.rainfall_mm).sum()
}

pub fn derive_metrics(payload: &DashboardPayload) -> Result<DerivedMetrics<'_>, DerivationError> {
    let current_moisture = current_moisture(&payload.soil_moisture)?;
    if payload.rainfall_forecast.is_empty() {
        return Err(DerivationError::EmptyRainfallForecast);
    }

    Ok(DerivedMetrics {
        current_moisture,
        total_rainfall_mm: total_rainfall(&payload.rainfall_forecast),
    })
}

/// One decimal place, e.g. `12.3`
pub fn format_rainfall(total_mm: f64) -> String {
    format!("{:.1}", total_mm)
}
