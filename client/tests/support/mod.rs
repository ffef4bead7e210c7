//! Test backends: an HTTP fixture served by axum and a scripted in-memory API
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tokio::sync::Notify;

use aquaguard_client::external::{FarmApi, HealthStatus};
use aquaguard_client::ApiError;
use shared::{DashboardPayload, FarmerInput, NewFarmerInput};

pub const EMPTY_SERIES_ID: &str = "empty-series";
pub const MALFORMED_ID: &str = "malformed";

/// Moisture readings served for every registered farm, oldest first
pub const MOISTURE: [f64; 7] = [41.0, 39.5, 37.2, 35.0, 33.1, 30.4, 28.6];
/// Forecast served for every registered farm
pub const RAINFALL: [f64; 7] = [0.0, 0.0, 12.4, 3.1, 0.0, 0.0, 5.5];

// =============================================================================
// HTTP fixture backend
// =============================================================================

#[derive(Default)]
pub struct FixtureBackend {
    pub farms: Mutex<HashMap<String, Value>>,
    pub submissions: Mutex<Vec<Value>>,
    pub fail_submissions: AtomicBool,
    pub dashboard_requests: AtomicUsize,
}

type Fixture = Arc<FixtureBackend>;

/// Serve the fixture on an ephemeral port; returns the `/api` base URL
pub async fn spawn_backend() -> (String, Fixture) {
    let fixture = Fixture::default();

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/farmer-input", post(submit_farmer_input))
        .route("/api/farmer-inputs", get(list_farmer_inputs))
        .route("/api/dashboard/:farmer_id", get(dashboard))
        .with_state(fixture.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture backend");
    let addr = listener.local_addr().expect("fixture address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture backend");
    });

    (format!("http://{}/api", addr), fixture)
}

/// Python-style naive UTC timestamp
fn naive(at: chrono::DateTime<Utc>) -> String {
    at.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

fn title_case(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "AquaGuard API",
        "timestamp": naive(Utc::now()),
        "version": "1.0.0"
    }))
}

async fn submit_farmer_input(State(fixture): State<Fixture>, Json(body): Json<Value>) -> Response {
    fixture.submissions.lock().unwrap().push(body.clone());
    if fixture.fail_submissions.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "Error saving farmer input"})),
        )
            .into_response();
    }

    let id = uuid::Uuid::new_v4().to_string();
    let farm = json!({
        "id": id,
        "latitude": body["latitude"],
        "longitude": body["longitude"],
        "crop_name": title_case(body["crop_name"].as_str().unwrap_or_default()),
        "created_at": naive(Utc::now()),
    });
    fixture.farms.lock().unwrap().insert(id, farm.clone());
    (StatusCode::CREATED, Json(farm)).into_response()
}

async fn list_farmer_inputs(State(fixture): State<Fixture>) -> Json<Value> {
    let farms: Vec<Value> = fixture.farms.lock().unwrap().values().cloned().collect();
    Json(Value::Array(farms))
}

async fn dashboard(State(fixture): State<Fixture>, Path(farmer_id): Path<String>) -> Response {
    fixture.dashboard_requests.fetch_add(1, Ordering::SeqCst);

    if farmer_id == MALFORMED_ID {
        return (StatusCode::OK, "{\"farmer_input\": ").into_response();
    }
    let farm = if farmer_id == EMPTY_SERIES_ID {
        Some(json!({
            "id": EMPTY_SERIES_ID,
            "latitude": 1.0,
            "longitude": 2.0,
            "crop_name": "Rice",
            "created_at": naive(Utc::now()),
        }))
    } else {
        fixture.farms.lock().unwrap().get(&farmer_id).cloned()
    };
    let Some(farm) = farm else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Farmer not found"})),
        )
            .into_response();
    };

    let now = Utc::now();
    let soil_moisture: Vec<Value> = if farmer_id == EMPTY_SERIES_ID {
        Vec::new()
    } else {
        MOISTURE
            .iter()
            .enumerate()
            .map(|(i, value)| {
                json!({
                    "date": naive(now - Duration::days(6 - i as i64)),
                    "moisture_percentage": value,
                    "source": "NASA-SMAP-Mock",
                    "quality": if i == 6 { "fair" } else { "good" },
                })
            })
            .collect()
    };
    let rainfall_forecast: Vec<Value> = RAINFALL
        .iter()
        .enumerate()
        .map(|(i, value)| {
            json!({
                "date": naive(now + Duration::days(i as i64)),
                "rainfall_mm": value,
                "forecast_confidence": 0.85,
                "source": "NASA-GPM-Mock",
            })
        })
        .collect();

    Json(json!({
        "farmer_input": farm,
        "soil_moisture": soil_moisture,
        "rainfall_forecast": rainfall_forecast,
        "irrigation_recommendation": {
            "recommendation": "Irrigate within 24 hours",
            "confidence": 0.9,
            "next_irrigation_date": naive(now + Duration::hours(12)),
            "water_amount_mm": 12.0,
            "reason": "Moisture (28.6%) below minimum threshold (40%) with minimal rainfall expected",
            "irrigation_status": "immediate",
            "urgency_level": "high",
            "water_deficit_mm": 18.84,
            "days_until_stress": 1,
            "alternative_actions": [
                "Apply mulch to reduce evaporation",
                "Increase irrigation frequency but reduce volume",
                "Monitor soil moisture twice daily"
            ],
            "cost_benefit_note": "Estimated cost: $1.80/acre. Prevents yield reduction of 15-25%."
        },
        "alerts": [
            {
                "alert_type": "drought",
                "risk_level": {
                    "level": "caution",
                    "color": "yellow",
                    "message": "Moderate drought risk: 28.6% moisture level"
                },
                "created_at": naive(now)
            }
        ],
        "last_updated": naive(now)
    }))
    .into_response()
}

// =============================================================================
// Scripted in-memory API
// =============================================================================

/// Dashboard fetches for ids in `held` wait until `release` is notified
#[derive(Default)]
pub struct ScriptedApi {
    pub payloads: Mutex<HashMap<String, DashboardPayload>>,
    pub held: Mutex<Vec<String>>,
    pub release: Notify,
    pub fail_submissions: AtomicBool,
    /// Submissions never answer while set
    pub hang_submissions: AtomicBool,
    pub submissions: Mutex<Vec<NewFarmerInput>>,
    pub fetches_started: AtomicUsize,
    pub fetches_dropped: Arc<AtomicUsize>,
}

/// Counts fetch futures dropped before they finished
struct DropProbe {
    counter: Arc<AtomicUsize>,
    armed: bool,
}

impl Drop for DropProbe {
    fn drop(&mut self) {
        if self.armed {
            self.counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl ScriptedApi {
    pub fn with_farm(self, payload: DashboardPayload) -> Self {
        self.payloads
            .lock()
            .unwrap()
            .insert(payload.farmer_input.id.clone(), payload);
        self
    }

    pub fn hold(self, farmer_id: &str) -> Self {
        self.held.lock().unwrap().push(farmer_id.to_string());
        self
    }
}

#[async_trait]
impl FarmApi for ScriptedApi {
    async fn submit_farmer_input(&self, input: &NewFarmerInput) -> Result<FarmerInput, ApiError> {
        self.submissions.lock().unwrap().push(input.clone());
        if self.hang_submissions.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.fail_submissions.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                body: "{\"detail\":\"Error saving farmer input\"}".to_string(),
            });
        }
        Ok(FarmerInput {
            id: format!("farm-{}", self.submissions.lock().unwrap().len()),
            latitude: input.latitude,
            longitude: input.longitude,
            crop_name: title_case(&input.crop_name),
            created_at: Utc::now(),
        })
    }

    async fn fetch_dashboard(&self, farmer_id: &str) -> Result<DashboardPayload, ApiError> {
        self.fetches_started.fetch_add(1, Ordering::SeqCst);
        let mut probe = DropProbe {
            counter: self.fetches_dropped.clone(),
            armed: true,
        };

        let held = self.held.lock().unwrap().iter().any(|id| id == farmer_id);
        if held {
            self.release.notified().await;
        }
        probe.armed = false;

        self.payloads
            .lock()
            .unwrap()
            .get(farmer_id)
            .cloned()
            .ok_or(ApiError::Status {
                status: 404,
                body: "{\"detail\":\"Farmer not found\"}".to_string(),
            })
    }

    async fn list_farmer_inputs(&self) -> Result<Vec<FarmerInput>, ApiError> {
        Ok(self
            .payloads
            .lock()
            .unwrap()
            .values()
            .map(|p| p.farmer_input.clone())
            .collect())
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            service: None,
            version: None,
        })
    }
}

/// A well-formed payload for `farmer_id`; `moisture` must not be empty
pub fn payload(farmer_id: &str, moisture: &[f64]) -> DashboardPayload {
    let now = Utc::now();
    let value = json!({
        "farmer_input": {
            "id": farmer_id,
            "latitude": 40.7128,
            "longitude": -74.006,
            "crop_name": "Wheat",
            "created_at": naive(now - Duration::days(30)),
        },
        "soil_moisture": moisture.iter().enumerate().map(|(i, m)| json!({
            "date": naive(now - Duration::days((moisture.len() - i) as i64)),
            "moisture_percentage": m,
            "quality": "good",
        })).collect::<Vec<_>>(),
        "rainfall_forecast": [
            {"date": naive(now), "rainfall_mm": 2.5, "forecast_confidence": 0.9},
            {"date": naive(now + Duration::days(1)), "rainfall_mm": 0.0, "forecast_confidence": 0.95}
        ],
        "irrigation_recommendation": {
            "recommendation": "No irrigation needed - optimal conditions",
            "confidence": 0.95,
            "next_irrigation_date": null,
            "water_amount_mm": null,
            "reason": "Soil moisture excellent",
            "irrigation_status": "skip",
            "urgency_level": "low",
            "water_deficit_mm": 0.0,
            "days_until_stress": 14,
            "alternative_actions": [],
            "cost_benefit_note": ""
        },
        "alerts": [
            {"alert_type": "flood", "risk_level": {"level": "safe", "color": "green", "message": "No significant flood or drought risks detected"}}
        ]
    });
    serde_json::from_value(value).expect("fixture payload")
}
