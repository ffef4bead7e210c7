//! Routes between the intake and dashboard views
//!
//! Navigation is a [`Route`] sent over a channel; the owner of the receiver
//! decides what to mount. A [`ScheduledNavigation`] delivers its route after
//! a delay unless it is cancelled or dropped first.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: landing page and intake form
    Intake,
    /// `/dashboard/{farmer_id}`
    Dashboard { farmer_id: String },
}

impl Route {
    pub fn dashboard(farmer_id: impl Into<String>) -> Self {
        Route::Dashboard {
            farmer_id: farmer_id.into(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Intake => "/".to_string(),
            Route::Dashboard { farmer_id } => format!("/dashboard/{}", farmer_id),
        }
    }

    /// Inverse of [`Route::path`]. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Intake);
        }
        let farmer_id = trimmed.strip_prefix("/dashboard/")?;
        if farmer_id.is_empty() || farmer_id.contains('/') {
            return None;
        }
        Some(Route::dashboard(farmer_id))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Sending half used by the flows to request a view change
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: mpsc::UnboundedSender<Route>,
}

impl Navigator {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigating");
        if self.tx.send(route).is_err() {
            tracing::debug!("navigation dropped, no router");
        }
    }

    /// Deliver `route` after `delay`. Must be called inside a tokio runtime.
    pub fn schedule(&self, route: Route, delay: Duration) -> ScheduledNavigation {
        tracing::debug!(%route, delay_ms = delay.as_millis() as u64, "navigation scheduled");
        let navigator = self.clone();
        let target = route.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(target);
        });

        ScheduledNavigation { route, handle }
    }
}

/// A pending delayed navigation. Aborted when dropped.
#[derive(Debug)]
pub struct ScheduledNavigation {
    route: Route,
    handle: JoinHandle<()>,
}

impl ScheduledNavigation {
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// True once the route has been delivered or the task was aborted
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        tracing::debug!(route = %self.route, "scheduled navigation cancelled");
        // abort happens in Drop
    }
}

impl Drop for ScheduledNavigation {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
