//! External API integrations

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use shared::{DashboardPayload, FarmerInput, NewFarmerInput};

use crate::error::ApiError;

pub mod farm_api;

pub use farm_api::FarmApiClient;

/// Response of `GET /health`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Backend operations the flows depend on
#[async_trait]
pub trait FarmApi: Send + Sync {
    /// `POST /farmer-input`
    async fn submit_farmer_input(&self, input: &NewFarmerInput) -> Result<FarmerInput, ApiError>;

    /// `GET /dashboard/{farmer_id}`
    async fn fetch_dashboard(&self, farmer_id: &str) -> Result<DashboardPayload, ApiError>;

    /// `GET /farmer-inputs`
    async fn list_farmer_inputs(&self) -> Result<Vec<FarmerInput>, ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

pub type SharedFarmApi = Arc<dyn FarmApi>;
