//! Flood and drought alert models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::timestamp;

/// Hazard an alert is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Flood,
    Drought,
    #[serde(other)]
    Unrecognized,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::Flood => write!(f, "Flood"),
            AlertType::Drought => write!(f, "Drought"),
            AlertType::Unrecognized => write!(f, "Hazard"),
        }
    }
}

/// Per-alert hazard severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Danger,
    Caution,
    Safe,
    #[serde(other)]
    Unrecognized,
}

impl From<&str> for RiskLevel {
    fn from(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "danger" => RiskLevel::Danger,
            "caution" => RiskLevel::Caution,
            "safe" => RiskLevel::Safe,
            _ => RiskLevel::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertLevel {
    pub level: RiskLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Flood or drought alert for the farm location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub alert_type: AlertType,
    pub risk_level: AlertLevel,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}
