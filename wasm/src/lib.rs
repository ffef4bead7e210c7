//! WebAssembly module for AquaGuard
//!
//! Provides client-side computation for:
//! - Dashboard view derivation from a backend payload
//! - Alert, recommendation and stress classification
//! - Intake form validation before submit

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

/// Build the dashboard view model from a `GET /dashboard/{id}` body
#[wasm_bindgen]
pub fn build_dashboard_view(payload_json: &str) -> Result<String, JsValue> {
    let payload: DashboardPayload = serde_json::from_str(payload_json)
        .map_err(|e| js_error("Invalid dashboard JSON", e))?;
    let view = shared::DashboardView::build(&payload)
        .map_err(|e| js_error("Incomplete dashboard data", e))?;

    serde_json::to_string(&view).map_err(|e| js_error("Serialization failed", e))
}

/// Validate the raw intake form; returns the `POST /farmer-input` body
#[wasm_bindgen]
pub fn validate_intake_form(
    latitude: &str,
    longitude: &str,
    crop_name: &str,
) -> Result<String, JsValue> {
    let request = shared::validate_intake(latitude, longitude, crop_name)
        .map_err(|e| js_error("Invalid farm data", e))?;

    serde_json::to_string(&request).map_err(|e| js_error("Serialization failed", e))
}

/// Alert risk level -> severity class
#[wasm_bindgen]
pub fn classify_alert_risk(level: &str) -> String {
    shared::classify_alert_risk(RiskLevel::from(level)).to_string()
}

/// Irrigation status -> action class
#[wasm_bindgen]
pub fn classify_irrigation_status(status: &str) -> String {
    shared::classify_irrigation_status(IrrigationStatus::from(status)).to_string()
}

/// Urgency level -> badge class
#[wasm_bindgen]
pub fn classify_urgency_level(urgency: &str) -> String {
    shared::classify_urgency_level(UrgencyLevel::from(urgency)).to_string()
}

/// Days until crop stress -> stress tier
#[wasm_bindgen]
pub fn classify_days_until_stress(days: u32) -> String {
    shared::classify_days_until_stress(days).to_string()
}

/// Rainfall total as shown on the summary card
#[wasm_bindgen]
pub fn format_rainfall(total_mm: f64) -> String {
    shared::format_rainfall(total_mm)
}
