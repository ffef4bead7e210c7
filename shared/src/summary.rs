//! Summary cards shown above the detail tabs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::derive::{derive_metrics, format_rainfall, DerivationError};
use crate::models::{Crop, DashboardPayload};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoistureCard {
    pub percentage: f64,
    pub sampled_at: DateTime<Utc>,
    pub quality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainfallCard {
    pub total_mm: f64,
    /// `total_mm` to one decimal
    pub display: String,
    pub forecast_days: usize,
}

/// Next irrigation, or an explicit "not needed"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum NextIrrigation {
    Scheduled(DateTime<Utc>),
    NotNeeded,
}

impl NextIrrigation {
    pub fn label(&self) -> String {
        match self {
            NextIrrigation::Scheduled(date) => date.format("%Y-%m-%d").to_string(),
            NextIrrigation::NotNeeded => "Not needed".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IrrigationCard {
    pub next: NextIrrigation,
    pub water_amount_mm: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropCard {
    pub crop: Crop,
    /// Name as registered, shown verbatim
    pub crop_name: String,
    pub monitoring_since: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryCards {
    pub moisture: MoistureCard,
    pub rainfall: RainfallCard,
    pub irrigation: IrrigationCard,
    pub crop: CropCard,
}

/// Project the payload onto the four summary cards
pub fn summarize(payload: &DashboardPayload) -> Result<SummaryCards, DerivationError> {
    let metrics = derive_metrics(payload)?;
    let recommendation = &payload.irrigation_recommendation;
    let farmer = &payload.farmer_input;

    Ok(SummaryCards {
        moisture: MoistureCard {
            percentage: metrics.current_moisture.moisture_percentage,
            sampled_at: metrics.current_moisture.date,
            quality: metrics.current_moisture.quality.clone(),
        },
        rainfall: RainfallCard {
            total_mm: metrics.total_rainfall_mm,
            display: format_rainfall(metrics.total_rainfall_mm),
            forecast_days: payload.rainfall_forecast.len(),
        },
        irrigation: IrrigationCard {
            next: match recommendation.next_irrigation_date {
                Some(date) => NextIrrigation::Scheduled(date),
                None => NextIrrigation::NotNeeded,
            },
            water_amount_mm: recommendation.water_amount(),
        },
        crop: CropCard {
            crop: farmer.crop(),
            crop_name: farmer.crop_name.clone(),
            monitoring_since: farmer.created_at,
        },
    })
}
