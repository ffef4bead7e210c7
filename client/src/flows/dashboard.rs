//! Dashboard flow: fetch one farmer's payload and derive the view model
//!
//! `Loading -> Ready | Failed`, keyed by farmer id. Every load bumps a
//! generation counter and aborts the previous fetch; a fetch result is only
//! applied when its generation is still current, so the last requested
//! farmer id wins regardless of completion order.

use shared::{DashboardPayload, DashboardView};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{ApiError, ClientError};
use crate::external::SharedFarmApi;
use crate::navigation::Route;
use crate::notification::Notifier;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading { farmer_id: String },
    Ready {
        farmer_id: String,
        view: Box<DashboardView>,
    },
    Failed { farmer_id: String, message: String },
}

impl DashboardState {
    pub fn farmer_id(&self) -> &str {
        match self {
            DashboardState::Loading { farmer_id }
            | DashboardState::Ready { farmer_id, .. }
            | DashboardState::Failed { farmer_id, .. } => farmer_id,
        }
    }

    pub fn view(&self) -> Option<&DashboardView> {
        match self {
            DashboardState::Ready { view, .. } => Some(view.as_ref()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DashboardState::Loading { .. })
    }

    /// "Return to intake" affordance, offered only on failure
    pub fn return_route(&self) -> Option<Route> {
        match self {
            DashboardState::Failed { .. } => Some(Route::Intake),
            _ => None,
        }
    }
}

/// A finished fetch, tagged with the generation that started it
#[derive(Debug)]
struct FetchOutcome {
    generation: u64,
    farmer_id: String,
    result: Result<DashboardPayload, ApiError>,
}

pub struct DashboardFlow {
    api: SharedFarmApi,
    notifier: Notifier,
    generation: u64,
    state: DashboardState,
    in_flight: Option<JoinHandle<()>>,
    outcomes_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl DashboardFlow {
    /// Start loading `farmer_id`. Must be called inside a tokio runtime.
    pub fn open(api: SharedFarmApi, notifier: Notifier, farmer_id: impl Into<String>) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        let farmer_id = farmer_id.into();
        let mut flow = Self {
            api,
            notifier,
            generation: 0,
            state: DashboardState::Loading {
                farmer_id: farmer_id.clone(),
            },
            in_flight: None,
            outcomes_tx,
            outcomes_rx,
        };
        flow.load(farmer_id);
        flow
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// (Re-)enter `Loading` for `farmer_id`, superseding any fetch in flight
    pub fn load(&mut self, farmer_id: impl Into<String>) {
        let farmer_id = farmer_id.into();
        self.generation += 1;
        if let Some(stale) = self.in_flight.take() {
            tracing::debug!(generation = self.generation - 1, "aborting superseded fetch");
            stale.abort();
        }

        tracing::info!(%farmer_id, generation = self.generation, "loading dashboard");
        self.state = DashboardState::Loading {
            farmer_id: farmer_id.clone(),
        };

        let api = self.api.clone();
        let tx = self.outcomes_tx.clone();
        let generation = self.generation;
        self.in_flight = Some(tokio::spawn(async move {
            let result = api.fetch_dashboard(&farmer_id).await;
            let _ = tx.send(FetchOutcome {
                generation,
                farmer_id,
                result,
            });
        }));
    }

    /// Manual refresh of the current farmer
    pub fn reload(&mut self) {
        let farmer_id = self.state.farmer_id().to_string();
        self.load(farmer_id);
    }

    /// Wait until the current generation settles into `Ready` or `Failed`
    pub async fn settle(&mut self) -> &DashboardState {
        while self.state.is_loading() {
            match self.outcomes_rx.recv().await {
                Some(outcome) => {
                    self.apply(outcome);
                }
                // unreachable while we hold `outcomes_tx`
                None => break,
            }
        }
        &self.state
    }

    /// Apply a finished fetch. Returns false when it was superseded.
    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation {
            tracing::debug!(
                farmer_id = %outcome.farmer_id,
                generation = outcome.generation,
                current = self.generation,
                "discarding superseded dashboard response"
            );
            return false;
        }
        self.in_flight = None;

        let built = outcome
            .result
            .map_err(ClientError::fetch)
            .and_then(|payload| DashboardView::build(&payload).map_err(ClientError::from));

        self.state = match built {
            Ok(view) => {
                tracing::info!(
                    farmer_id = %outcome.farmer_id,
                    alerts = view.alerts.len(),
                    "dashboard ready"
                );
                DashboardState::Ready {
                    farmer_id: outcome.farmer_id,
                    view: Box::new(view),
                }
            }
            Err(err) => {
                tracing::warn!(farmer_id = %outcome.farmer_id, error = %err, "dashboard failed");
                self.notifier.notify(err.notification());
                DashboardState::Failed {
                    farmer_id: outcome.farmer_id,
                    message: err.to_string(),
                }
            }
        };
        true
    }
}

impl Drop for DashboardFlow {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
        }
    }
}
