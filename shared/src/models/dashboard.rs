//! Consolidated dashboard payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alert, FarmerInput, IrrigationRecommendation, RainfallForecastDay, SoilMoistureSample};
use crate::types::timestamp;

/// Response of `GET /dashboard/{farmer_id}`
///
/// `soil_moisture` is ordered oldest to newest; its last element is the
/// current reading. Both series are non-empty in a well-formed payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardPayload {
    pub farmer_input: FarmerInput,
    pub soil_moisture: Vec<SoilMoistureSample>,
    pub rainfall_forecast: Vec<RainfallForecastDay>,
    pub irrigation_recommendation: IrrigationRecommendation,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default, with = "timestamp::option")]
    pub last_updated: Option<DateTime<Utc>>,
}
