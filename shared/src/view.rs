//! Dashboard view model handed to the presentation layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classification::{
    classify_alert_risk, classify_recommendation, ActionClass, AlertSeverity, BadgeClass,
    StressTier,
};
use crate::derive::DerivationError;
use crate::models::{Alert, AlertType, DashboardPayload, IrrigationRecommendation};
use crate::summary::{summarize, SummaryCards};
use crate::types::GpsCoordinates;

/// One point of a chart series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StressBlock {
    pub days: u32,
    pub tier: StressTier,
}

/// Recommendation tab. Optional blocks are `None` when hidden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationPanel {
    pub headline: String,
    pub reason: String,
    pub action_class: ActionClass,
    pub urgency_badge: BadgeClass,
    pub confidence_percent: u8,
    pub water_amount_mm: f64,
    pub deficit_mm: Option<f64>,
    pub stress: Option<StressBlock>,
    pub next_irrigation: Option<DateTime<Utc>>,
    pub cost_benefit_note: Option<String>,
    pub alternative_actions: Option<Vec<String>>,
}

impl RecommendationPanel {
    pub fn from_recommendation(recommendation: &IrrigationRecommendation) -> Self {
        let classes = classify_recommendation(recommendation);

        Self {
            headline: recommendation.recommendation.clone(),
            reason: recommendation.reason.clone(),
            action_class: classes.action,
            urgency_badge: classes.urgency,
            confidence_percent: (recommendation.confidence.clamp(0.0, 1.0) * 100.0).round() as u8,
            water_amount_mm: recommendation.water_amount(),
            deficit_mm: recommendation.visible_deficit(),
            stress: recommendation
                .days_until_stress
                .zip(classes.stress)
                .map(|(days, tier)| StressBlock { days, tier }),
            next_irrigation: recommendation.next_irrigation_date,
            cost_benefit_note: recommendation
                .cost_benefit_note
                .clone()
                .filter(|note| !note.trim().is_empty()),
            alternative_actions: Some(recommendation.alternative_actions.clone())
                .filter(|actions| !actions.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertBadge {
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub message: String,
}

impl From<&Alert> for AlertBadge {
    fn from(alert: &Alert) -> Self {
        Self {
            alert_type: alert.alert_type,
            severity: classify_alert_risk(alert.risk_level.level),
            message: alert.risk_level.message.clone(),
        }
    }
}

/// Everything the dashboard renders for one farmer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub farmer_id: String,
    pub location: GpsCoordinates,
    pub summary: SummaryCards,
    pub recommendation: RecommendationPanel,
    /// Input order
    pub alerts: Vec<AlertBadge>,
    pub moisture_series: Vec<ChartPoint>,
    pub rainfall_series: Vec<ChartPoint>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl DashboardView {
    /// Fails closed on a payload with an empty series
    pub fn build(payload: &DashboardPayload) -> Result<Self, DerivationError> {
        let summary = summarize(payload)?;

        Ok(Self {
            farmer_id: payload.farmer_input.id.clone(),
            location: payload.farmer_input.coordinates(),
            summary,
            recommendation: RecommendationPanel::from_recommendation(
                &payload.irrigation_recommendation,
            ),
            alerts: payload.alerts.iter().map(AlertBadge::from).collect(),
            moisture_series: payload
                .soil_moisture
                .iter()
                .map(|sample| ChartPoint {
                    date: sample.date,
                    value: sample.moisture_percentage,
                })
                .collect(),
            rainfall_series: payload
                .rainfall_forecast
                .iter()
                .map(|day| ChartPoint {
                    date: day.date,
                    value: day.rainfall_mm,
                })
                .collect(),
            last_updated: payload.last_updated,
        })
    }
}
