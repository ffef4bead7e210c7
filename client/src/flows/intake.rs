//! Intake flow: collect farm metadata, submit it, hand off to the dashboard
//!
//! `Idle -> Submitting -> Succeeded`, with a failed submission returning to
//! `Idle` and leaving the form untouched. Success schedules navigation to
//! the dashboard; the pending navigation is owned by the flow and aborted if
//! the flow is dropped first.

use std::time::Duration;

use shared::{validate_intake, Crop, FarmerInput, NewFarmerInput};

use crate::error::{ApiError, ClientError, ClientResult};
use crate::external::SharedFarmApi;
use crate::navigation::{Navigator, Route, ScheduledNavigation};
use crate::notification::{Notification, Notifier};

/// Sub-state of the intake view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeView {
    Landing,
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeState {
    Idle,
    Submitting,
    Succeeded { farmer_id: String },
}

/// Raw form values, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub latitude: String,
    pub longitude: String,
    pub crop_name: String,
}

impl IntakeForm {
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        crop_name: impl Into<String>,
    ) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            crop_name: crop_name.into(),
        }
    }

    pub fn select_crop(&mut self, crop: Crop) {
        self.crop_name = crop.as_str().to_string();
    }
}

pub struct IntakeFlow {
    api: SharedFarmApi,
    notifier: Notifier,
    navigator: Navigator,
    navigation_delay: Duration,
    view: IntakeView,
    state: IntakeState,
    form: IntakeForm,
    pending_navigation: Option<ScheduledNavigation>,
}

impl IntakeFlow {
    pub fn new(
        api: SharedFarmApi,
        notifier: Notifier,
        navigator: Navigator,
        navigation_delay: Duration,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            navigation_delay,
            view: IntakeView::Landing,
            state: IntakeState::Idle,
            form: IntakeForm::default(),
            pending_navigation: None,
        }
    }

    pub fn view(&self) -> IntakeView {
        self.view
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    /// Crops offered by the selector
    pub fn crop_options(&self) -> &'static [Crop] {
        &Crop::ALL
    }

    /// Editable form, or `None` while the form is locked
    pub fn form_mut(&mut self) -> Option<&mut IntakeForm> {
        match self.state {
            IntakeState::Idle => Some(&mut self.form),
            _ => None,
        }
    }

    /// Landing -> Form
    pub fn start(&mut self) {
        if self.view == IntakeView::Landing {
            self.view = IntakeView::Form;
        }
    }

    /// Form -> Landing; ignored unless idle
    pub fn back(&mut self) {
        if self.state == IntakeState::Idle {
            self.view = IntakeView::Landing;
        }
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.view == IntakeView::Form && self.state == IntakeState::Idle
    }

    pub fn pending_navigation(&self) -> Option<&Route> {
        self.pending_navigation
            .as_ref()
            .map(ScheduledNavigation::route)
    }

    /// Validate the form and enter `Submitting`
    pub fn begin_submit(&mut self) -> ClientResult<NewFarmerInput> {
        if !self.can_submit() {
            let reason = match (&self.state, self.view) {
                (IntakeState::Submitting, _) => "a submission is already in progress",
                (IntakeState::Succeeded { .. }, _) => "the farm has already been registered",
                (_, IntakeView::Landing) => "the intake form is not open",
                (IntakeState::Idle, IntakeView::Form) => "submit is disabled",
            };
            return Err(ClientError::InvalidStateTransition(reason.to_string()));
        }

        let request = validate_intake(
            &self.form.latitude,
            &self.form.longitude,
            &self.form.crop_name,
        )
        .map_err(|invalid| {
            let err = ClientError::from(invalid);
            self.notifier.notify(err.notification());
            err
        })?;

        tracing::info!(
            latitude = request.latitude,
            longitude = request.longitude,
            crop = %request.crop_name,
            "submitting farm data"
        );
        self.state = IntakeState::Submitting;
        Ok(request)
    }

    /// Leave `Submitting` with the backend's answer
    pub fn finish_submit(
        &mut self,
        outcome: Result<FarmerInput, ApiError>,
    ) -> ClientResult<String> {
        if self.state != IntakeState::Submitting {
            return Err(ClientError::InvalidStateTransition(
                "no submission in progress".to_string(),
            ));
        }

        match outcome {
            Ok(farmer) => {
                tracing::info!(farmer_id = %farmer.id, "farm data submitted");
                self.notifier.notify(Notification::success(
                    "Farm registered",
                    format!(
                        "Monitoring {} at {}",
                        farmer.crop_name,
                        farmer.coordinates()
                    ),
                ));

                let route = Route::dashboard(farmer.id.clone());
                self.pending_navigation =
                    Some(self.navigator.schedule(route, self.navigation_delay));
                self.state = IntakeState::Succeeded {
                    farmer_id: farmer.id.clone(),
                };
                Ok(farmer.id)
            }
            Err(api_err) => {
                tracing::warn!(error = %api_err, "farm data submission failed");
                let err = ClientError::submission(api_err);
                self.notifier.notify(err.notification());
                self.state = IntakeState::Idle;
                Err(err)
            }
        }
    }

    /// Validate, submit and settle. Returns the new farmer id.
    ///
    /// Dropping the returned future mid-request puts the flow back to
    /// `Idle` with the form intact.
    pub async fn submit(&mut self) -> ClientResult<String> {
        let request = self.begin_submit()?;
        let api = self.api.clone();
        let pending = PendingSubmission { flow: self };
        let outcome = api.submit_farmer_input(&request).await;
        pending.finish(outcome)
    }

    /// Abandon the scheduled dashboard navigation, if any
    pub fn cancel_navigation(&mut self) {
        if let Some(pending) = self.pending_navigation.take() {
            pending.cancel();
        }
    }
}

/// A request in flight for `IntakeFlow::submit`
struct PendingSubmission<'a> {
    flow: &'a mut IntakeFlow,
}

impl PendingSubmission<'_> {
    fn finish(mut self, outcome: Result<FarmerInput, ApiError>) -> ClientResult<String> {
        self.flow.finish_submit(outcome)
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if self.flow.state == IntakeState::Submitting {
            tracing::warn!("farm data submission abandoned");
            self.flow.state = IntakeState::Idle;
        }
    }
}
