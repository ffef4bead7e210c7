//! Irrigation recommendation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::timestamp;

/// When irrigation should happen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationStatus {
    Immediate,
    Scheduled,
    Monitor,
    Skip,
    None,
    /// Any status this client does not know about
    #[serde(other)]
    Unrecognized,
}

impl From<&str> for IrrigationStatus {
    fn from(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "immediate" => IrrigationStatus::Immediate,
            "scheduled" => IrrigationStatus::Scheduled,
            "monitor" => IrrigationStatus::Monitor,
            "skip" => IrrigationStatus::Skip,
            "none" => IrrigationStatus::None,
            _ => IrrigationStatus::Unrecognized,
        }
    }
}

/// How critical the situation is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
    #[serde(other)]
    Unrecognized,
}

impl From<&str> for UrgencyLevel {
    fn from(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "critical" => UrgencyLevel::Critical,
            "high" => UrgencyLevel::High,
            "medium" => UrgencyLevel::Medium,
            "low" => UrgencyLevel::Low,
            _ => UrgencyLevel::Unrecognized,
        }
    }
}

/// Precomputed recommendation delivered with the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IrrigationRecommendation {
    pub recommendation: String,
    pub reason: String,
    pub irrigation_status: IrrigationStatus,
    pub urgency_level: UrgencyLevel,
    /// 0.0 - 1.0
    pub confidence: f64,
    #[serde(default)]
    pub water_amount_mm: Option<f64>,
    #[serde(default)]
    pub water_deficit_mm: Option<f64>,
    #[serde(default)]
    pub days_until_stress: Option<u32>,
    #[serde(default, with = "timestamp::option")]
    pub next_irrigation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cost_benefit_note: Option<String>,
    #[serde(default)]
    pub alternative_actions: Vec<String>,
}

impl IrrigationRecommendation {
    /// Recommended water amount, 0 when the backend sends none
    pub fn water_amount(&self) -> f64 {
        self.water_amount_mm.unwrap_or(0.0)
    }

    /// Deficit worth showing: present and strictly positive
    pub fn visible_deficit(&self) -> Option<f64> {
        self.water_deficit_mm.filter(|deficit| *deficit > 0.0)
    }
}
