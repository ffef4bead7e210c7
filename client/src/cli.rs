//! Command-line driver
//!
//! ```text
//! aquaguard intake <latitude> <longitude> <crop>
//! aquaguard dashboard <farmer-id>
//! aquaguard farms
//! ```

use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::external::{FarmApi, SharedFarmApi};
use crate::flows::{DashboardFlow, DashboardState, IntakeFlow, IntakeForm};
use crate::navigation::{Navigator, Route};
use crate::notification::{Notification, Notifier};

#[derive(Parser, Debug)]
#[command(name = "aquaguard")]
#[command(about = "AquaGuard farm monitoring client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Register a farm, then open its dashboard
    Intake {
        #[arg(allow_negative_numbers = true)]
        latitude: String,
        #[arg(allow_negative_numbers = true)]
        longitude: String,
        crop: String,
    },
    /// Open an existing farm's dashboard
    Dashboard { farmer_id: String },
    /// List registered farms
    Farms,
}

/// Run one command to completion and return what it prints.
///
/// Notifications are logged while the command runs; returns once every
/// sender is gone and the log is drained.
pub async fn run(
    command: Commands,
    api: SharedFarmApi,
    navigation_delay: Duration,
) -> anyhow::Result<String> {
    let (notifier, mut notifications) = Notifier::channel();
    let toasts = tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            notification.log();
        }
    });

    let result = match command {
        Commands::Intake {
            latitude,
            longitude,
            crop,
        } => {
            let form = IntakeForm::new(latitude, longitude, crop);
            run_intake(api, notifier, navigation_delay, form).await
        }
        Commands::Dashboard { farmer_id } => run_dashboard(api, notifier, farmer_id).await,
        Commands::Farms => list_farms(api.as_ref(), notifier).await,
    };

    toasts.await.ok();
    result
}

async fn run_intake(
    api: SharedFarmApi,
    notifier: Notifier,
    navigation_delay: Duration,
    form: IntakeForm,
) -> anyhow::Result<String> {
    let (navigator, mut routes) = Navigator::channel();
    let mut intake = IntakeFlow::new(api.clone(), notifier.clone(), navigator, navigation_delay);
    intake.start();
    if let Some(fields) = intake.form_mut() {
        *fields = form;
    }

    let farmer_id = intake.submit().await?;
    tracing::info!("Registered farm {}", farmer_id);

    match routes.recv().await {
        Some(Route::Dashboard { farmer_id }) => {
            drop(intake);
            run_dashboard(api, notifier, farmer_id).await
        }
        Some(route) => bail!("unexpected navigation to {}", route),
        None => bail!("navigation channel closed"),
    }
}

async fn run_dashboard(
    api: SharedFarmApi,
    notifier: Notifier,
    farmer_id: String,
) -> anyhow::Result<String> {
    let mut dashboard = DashboardFlow::open(api, notifier, farmer_id);
    dashboard.settle().await;

    let state = dashboard.state();
    match state {
        DashboardState::Ready { view, .. } => {
            serde_json::to_string_pretty(view).context("serializing dashboard")
        }
        DashboardState::Failed { message, .. } => {
            let back = state.return_route().unwrap_or(Route::Intake);
            bail!("{} (return to intake: {})", message, back)
        }
        DashboardState::Loading { .. } => bail!("dashboard did not finish loading"),
    }
}

async fn list_farms(api: &dyn FarmApi, notifier: Notifier) -> anyhow::Result<String> {
    let farms = match api.list_farmer_inputs().await {
        Ok(farms) => farms,
        Err(e) => {
            notifier.notify(Notification::error("Failed to load farms", e.to_string()));
            return Err(e.into());
        }
    };

    if farms.is_empty() {
        return Ok("No farms registered yet.".to_string());
    }
    let lines: Vec<String> = farms
        .iter()
        .map(|farm| {
            format!(
                "{}  {:<10} {}  since {}",
                farm.id,
                farm.crop_name,
                farm.coordinates(),
                farm.created_at.format("%Y-%m-%d")
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
