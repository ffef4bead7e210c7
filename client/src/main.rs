//! AquaGuard - command-line driver
//!
//! Registers a farm or opens an existing farm's dashboard, and prints the
//! resulting dashboard view model as JSON.

use std::sync::Arc;

use aquaguard_client::{
    cli::{self, Cli},
    external::{FarmApi, FarmApiClient, SharedFarmApi},
    Config,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aquaguard=debug,aquaguard_client=debug,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AquaGuard client");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Backend: {}", config.api.base_url);

    let api: SharedFarmApi = Arc::new(FarmApiClient::new(&config.api)?);

    match api.health().await {
        Ok(health) => tracing::info!("Backend status: {}", health.status),
        Err(e) => tracing::warn!("Backend health check failed: {}", e),
    }

    let output = cli::run(args.command, api, config.intake.navigation_delay()).await?;
    println!("{}", output);
    Ok(())
}
