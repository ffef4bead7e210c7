//! Configuration management for the AquaGuard client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with AQUAGUARD_ prefix

use std::time::Duration;

use config::{builder::DefaultState, ConfigBuilder, Environment, File};
use reqwest::Url;
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Backend API configuration
    pub api: ApiConfig,

    /// Intake flow configuration
    pub intake: IntakeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend API, including the `/api` prefix
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IntakeConfig {
    /// Delay between a successful submission and opening the dashboard
    pub navigation_delay_ms: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl IntakeConfig {
    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> ClientResult<Self> {
        let environment =
            std::env::var("AQUAGUARD_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::builder(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AQUAGUARD_ prefix)
            .add_source(
                Environment::with_prefix("AQUAGUARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize::<Config>()?.validated()
    }

    /// Builder preloaded with defaults
    pub fn builder(environment: &str) -> ClientResult<ConfigBuilder<DefaultState>> {
        Ok(config::Config::builder()
            .set_default("environment", environment)?
            .set_default("api.base_url", "http://localhost:8001/api")?
            .set_default("api.timeout_secs", 30)?
            .set_default("intake.navigation_delay_ms", 1500)?)
    }

    /// Normalize and check values the type system cannot
    pub fn validated(mut self) -> ClientResult<Self> {
        let base_url = self.api.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("api.base_url is empty".into()));
        }
        let parsed = Url::parse(&base_url).map_err(|e| {
            ClientError::Configuration(format!("api.base_url {:?} is invalid: {}", base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Configuration(format!(
                "api.base_url must use http or https, got {:?}",
                parsed.scheme()
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ClientError::Configuration(
                "api.timeout_secs must be positive".into(),
            ));
        }

        self.api.base_url = base_url;
        Ok(self)
    }
}
