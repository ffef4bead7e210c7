//! Satellite telemetry series

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::timestamp;

/// One soil moisture reading (NASA SMAP)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilMoistureSample {
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub moisture_percentage: f64,
    #[serde(default = "default_quality")]
    pub quality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

fn default_quality() -> String {
    "good".to_string()
}

/// One forecast day of rainfall (NASA GPM)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainfallForecastDay {
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub rainfall_mm: f64,
    /// 0.0 - 1.0
    pub forecast_confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
