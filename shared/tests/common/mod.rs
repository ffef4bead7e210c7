#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use shared::*;

pub fn farmer() -> FarmerInput {
    FarmerInput {
        id: "farm-001".to_string(),
        latitude: 40.7128,
        longitude: -74.006,
        crop_name: "Corn".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
    }
}

pub fn moisture_series(values: &[f64]) -> Vec<SoilMoistureSample> {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| SoilMoistureSample {
            date: start + Duration::days(i as i64),
            moisture_percentage: *value,
            quality: "good".to_string(),
            source: Some("NASA-SMAP".to_string()),
        })
        .collect()
}

pub fn rainfall_series(values: &[f64]) -> Vec<RainfallForecastDay> {
    let start = Utc.with_ymd_and_hms(2024, 6, 8, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| RainfallForecastDay {
            date: start + Duration::days(i as i64),
            rainfall_mm: *value,
            forecast_confidence: 0.9,
            source: None,
        })
        .collect()
}

pub fn recommendation(status: IrrigationStatus, urgency: UrgencyLevel) -> IrrigationRecommendation {
    IrrigationRecommendation {
        recommendation: "Schedule irrigation within 2-3 days".to_string(),
        reason: "Moisture approaching optimal range".to_string(),
        irrigation_status: status,
        urgency_level: urgency,
        confidence: 0.85,
        water_amount_mm: Some(7.2),
        water_deficit_mm: Some(4.5),
        days_until_stress: Some(4),
        next_irrigation_date: Some(Utc.with_ymd_and_hms(2024, 6, 10, 6, 0, 0).unwrap()),
        cost_benefit_note: Some("Estimated cost: $1.08/acre.".to_string()),
        alternative_actions: vec!["Use drip irrigation for efficiency".to_string()],
    }
}

pub fn payload(moisture: &[f64], rainfall: &[f64]) -> DashboardPayload {
    DashboardPayload {
        farmer_input: farmer(),
        soil_moisture: moisture_series(moisture),
        rainfall_forecast: rainfall_series(rainfall),
        irrigation_recommendation: recommendation(
            IrrigationStatus::Scheduled,
            UrgencyLevel::Medium,
        ),
        alerts: vec![Alert {
            alert_type: AlertType::Flood,
            risk_level: AlertLevel {
                level: RiskLevel::Safe,
                message: "No significant flood or drought risks detected".to_string(),
                color: Some("green".to_string()),
            },
            created_at: None,
        }],
        last_updated: None,
    }
}
