//! HTTP client for the AquaGuard backend
//!
//! JSON over HTTP. Any non-2xx status is an error; bodies are decoded only
//! after the status check so a malformed payload is reported as such.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use shared::{DashboardPayload, FarmerInput, NewFarmerInput};

use super::{FarmApi, HealthStatus};
use crate::config::ApiConfig;
use crate::error::{ApiError, ClientError, ClientResult};

/// AquaGuard backend client
#[derive(Clone)]
pub struct FarmApiClient {
    client: Client,
    base_url: Url,
}

impl FarmApiClient {
    /// Create a client for a validated [`ApiConfig`]
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Configuration(format!("HTTP client: {}", e)))?;

        Self::with_client(client, &config.base_url)
    }

    /// Create a client with a custom reqwest client (for testing)
    pub fn with_client(client: Client, base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            ClientError::Configuration(format!("api.base_url {:?} is invalid: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "api.base_url {} cannot be used as a base",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{segments...}`, each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl FarmApi for FarmApiClient {
    async fn submit_farmer_input(&self, input: &NewFarmerInput) -> Result<FarmerInput, ApiError> {
        let url = self.endpoint(&["farmer-input"])?;
        tracing::debug!(%url, crop = %input.crop_name, "POST");
        let response = self.client.post(url).json(input).send().await?;
        Self::decode(response).await
    }

    async fn fetch_dashboard(&self, farmer_id: &str) -> Result<DashboardPayload, ApiError> {
        self.get_json(&["dashboard", farmer_id]).await
    }

    async fn list_farmer_inputs(&self) -> Result<Vec<FarmerInput>, ApiError> {
        self.get_json(&["farmer-inputs"]).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json(&["health"]).await
    }
}
