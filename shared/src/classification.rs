//! Severity and urgency classification
//!
//! Four independent tables map recommendation and alert fields onto the
//! presentation classes the dashboard renders. Each table is its own total
//! function; they share vocabulary but are never derived from one another.

use serde::{Deserialize, Serialize};

use crate::models::{IrrigationRecommendation, IrrigationStatus, RiskLevel, UrgencyLevel};

/// Presentation class of an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    HighSeverity,
    MediumSeverity,
    LowSeverity,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::HighSeverity => "high-severity",
            AlertSeverity::MediumSeverity => "medium-severity",
            AlertSeverity::LowSeverity => "low-severity",
        }
    }
}

/// Presentation class of the irrigation status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ActionClass {
    UrgentAction,
    PlannedAction,
    Watch,
    Nominal,
}

impl ActionClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionClass::UrgentAction => "urgent-action",
            ActionClass::PlannedAction => "planned-action",
            ActionClass::Watch => "watch",
            ActionClass::Nominal => "nominal",
        }
    }
}

/// Badge class of the urgency level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeClass {
    Severe,
    Elevated,
    Moderate,
    Normal,
}

impl BadgeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeClass::Severe => "severe",
            BadgeClass::Elevated => "elevated",
            BadgeClass::Moderate => "moderate",
            BadgeClass::Normal => "normal",
        }
    }
}

/// Urgency tier derived from days until crop stress
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StressTier {
    Severe,
    Elevated,
    Normal,
}

impl StressTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressTier::Severe => "severe",
            StressTier::Elevated => "elevated",
            StressTier::Normal => "normal",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(AlertSeverity, ActionClass, BadgeClass, StressTier);

/// danger -> high, caution -> medium, everything else -> low
pub fn classify_alert_risk(level: RiskLevel) -> AlertSeverity {
    match level {
        RiskLevel::Danger => AlertSeverity::HighSeverity,
        RiskLevel::Caution => AlertSeverity::MediumSeverity,
        RiskLevel::Safe | RiskLevel::Unrecognized => AlertSeverity::LowSeverity,
    }
}

pub fn classify_irrigation_status(status: IrrigationStatus) -> ActionClass {
    match status {
        IrrigationStatus::Immediate => ActionClass::UrgentAction,
        IrrigationStatus::Scheduled => ActionClass::PlannedAction,
        IrrigationStatus::Monitor => ActionClass::Watch,
        IrrigationStatus::Skip | IrrigationStatus::None | IrrigationStatus::Unrecognized => {
            ActionClass::Nominal
        }
    }
}

pub fn classify_urgency_level(level: UrgencyLevel) -> BadgeClass {
    match level {
        UrgencyLevel::Critical => BadgeClass::Severe,
        UrgencyLevel::High => BadgeClass::Elevated,
        UrgencyLevel::Medium => BadgeClass::Moderate,
        UrgencyLevel::Low | UrgencyLevel::Unrecognized => BadgeClass::Normal,
    }
}

/// 0-2 days -> severe, 3-5 -> elevated, more -> normal
pub fn classify_days_until_stress(days: u32) -> StressTier {
    match days {
        0..=2 => StressTier::Severe,
        3..=5 => StressTier::Elevated,
        _ => StressTier::Normal,
    }
}

/// All classes of one recommendation, each from its own table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationClasses {
    pub action: ActionClass,
    pub urgency: BadgeClass,
    /// Only present when the backend reports days until stress
    pub stress: Option<StressTier>,
}

pub fn classify_recommendation(recommendation: &IrrigationRecommendation) -> RecommendationClasses {
    RecommendationClasses {
        action: classify_irrigation_status(recommendation.irrigation_status),
        urgency: classify_urgency_level(recommendation.urgency_level),
        stress: recommendation
            .days_until_stress
            .map(classify_days_until_stress),
    }
}
