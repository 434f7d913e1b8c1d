use std::collections::BTreeMap;
use std::time::Duration;

use chrono::NaiveDate;
use error_common::Notification;
use logger_redacted::redacted_info;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Result, WorkflowError};
use crate::state_machine::{reduce, WizardAction, WizardState};
use crate::steps::StepId;

/// Default destination after a completed onboarding
pub const DEFAULT_REDIRECT: &str = "/patients";

/// Where the wizard goes once it is done
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

/// Navigator that only remembers where it was sent
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub history: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&mut self, path: &str) {
        self.history.push(path.to_string());
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub registration_id: Uuid,
    pub patient_name: String,
    pub redirected_to: String,
    pub notification: Notification,
}

/// The "New Patient Onboarding" wizard
#[derive(Debug)]
pub struct OnboardingWizard {
    state: WizardState,
    submit_delay: Duration,
    redirect_path: String,
}

impl OnboardingWizard {
    /// Mount the wizard on the first step
    pub fn new() -> Self {
        Self::with_state(WizardState::default())
    }

    /// Mount with a fixed "today", used for date of birth checks
    pub fn starting_on(today: NaiveDate) -> Self {
        Self::with_state(WizardState::new(today))
    }

    fn with_state(state: WizardState) -> Self {
        Self {
            state,
            submit_delay: Duration::ZERO,
            redirect_path: DEFAULT_REDIRECT.to_string(),
        }
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn with_redirect_path(mut self, path: impl Into<String>) -> Self {
        self.redirect_path = path.into();
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn dispatch(&mut self, action: WizardAction) -> &WizardState {
        let today = self.state.today;
        let state = std::mem::replace(&mut self.state, WizardState::new(today));
        self.state = reduce(state, action);
        &self.state
    }

    pub fn current_step(&self) -> StepId {
        self.state.current
    }

    pub fn is_current_step_complete(&self) -> bool {
        self.state.is_complete(self.state.current)
    }

    pub fn all_steps_complete(&self) -> bool {
        self.state.all_complete()
    }

    /// Whether the Next button is enabled
    pub fn can_go_next(&self) -> bool {
        self.is_current_step_complete()
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.current.previous().is_some()
    }

    /// The last step shows "Complete Onboarding" instead of Next
    pub fn is_last_step(&self) -> bool {
        self.state.current.next().is_none()
    }

    /// Whether "Complete Onboarding" is enabled
    pub fn can_submit(&self) -> bool {
        self.all_steps_complete()
    }

    pub fn completion_map(&self) -> BTreeMap<StepId, bool> {
        self.state.completion_map()
    }

    /// Progress bar fill for the current step
    pub fn progress_percent(&self) -> u8 {
        match self.state.current {
            StepId::BasicInfo => 25,
            StepId::MedicalHistory => 50,
            StepId::Insurance => 75,
            StepId::Consent => 100,
        }
    }

    /// Move forward, reporting why when the gate is closed
    pub fn try_next(&mut self) -> Result<StepId> {
        let current = self.state.current;
        if !self.is_current_step_complete() {
            return Err(WorkflowError::StepNotComplete(current));
        }
        if current.next().is_none() {
            return Err(WorkflowError::NoNextStep);
        }
        Ok(self.dispatch(WizardAction::Next).current)
    }

    pub fn previous(&mut self) -> StepId {
        self.dispatch(WizardAction::Previous).current
    }

    /// Complete onboarding
    ///
    /// After the simulated delay the navigator is sent to the redirect path
    /// exactly once and every entered value is dropped. Nothing is persisted.
    pub async fn submit<N: Navigator>(&mut self, navigator: &mut N) -> Result<SubmitOutcome> {
        if !self.can_submit() {
            return Err(WorkflowError::StepsIncomplete(self.state.incomplete_steps()));
        }

        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        let today = self.state.today;
        let finished = std::mem::replace(&mut self.state, WizardState::new(today));
        let patient_name = finished
            .basic_info()
            .map(|b| b.full_name())
            .unwrap_or_default();
        let registration_id = Uuid::new_v4();

        redacted_info!(
            "Onboarding completed, registration {} ({})",
            registration_id,
            finished.basic_info().map(|b| b.email.as_str()).unwrap_or("")
        );

        navigator.navigate_to(&self.redirect_path);

        Ok(SubmitOutcome {
            registration_id,
            notification: Notification::success(
                "Patient onboarded",
                format!("{patient_name} has been registered"),
            ),
            patient_name,
            redirected_to: self.redirect_path.clone(),
        })
    }
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}
