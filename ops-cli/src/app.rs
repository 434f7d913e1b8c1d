//! Services behind the terminal commands, wired from configuration

use std::sync::Arc;

use auth_identity::{navigation_for, InMemorySessionStore, NavItem, Role, SessionContext};
use chat_assistant::{Assistant, Reply};
use chrono::NaiveDate;
use config_engine::CareDeskConfig;
use error_common::CareDeskError;
use scheduling_service::{
    AppointmentForm, BookingConfirmation, ConflictChecker, ConflictStatus, Patient, PatientDirectory, SlotKey,
};
use workflow_engine::OnboardingWizard;

type Result<T> = std::result::Result<T, CareDeskError>;

/// Everything a booking needs, as typed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub patient_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub provider: String,
    pub visit_type: String,
    pub reason: String,
}

pub struct App {
    config: CareDeskConfig,
    checker: Arc<ConflictChecker>,
    directory: PatientDirectory,
    session: SessionContext<InMemorySessionStore>,
    assistant: Assistant,
}

impl App {
    pub fn new(config: CareDeskConfig) -> Self {
        let delays = &config.delays;
        let checker = Arc::new(ConflictChecker::with_sample_data().with_delay(delays.conflict_check()));
        let directory = PatientDirectory::with_sample_data().with_delay(delays.search());
        let assistant = Assistant::default().with_typing_delay(delays.chat_typing());

        Self {
            checker,
            directory,
            session: SessionContext::new(Arc::new(InMemorySessionStore::new())),
            assistant,
            config,
        }
    }

    pub fn config(&self) -> &CareDeskConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext<InMemorySessionStore> {
        &self.session
    }

    /// Start a session and return the menu it unlocks
    pub async fn login(&self, role: Role) -> Result<Vec<NavItem>> {
        self.session.login(role).await?;
        Ok(self.session.navigation().await?)
    }

    pub fn menu(&self, role: Role) -> Vec<NavItem> {
        navigation_for(role)
    }

    pub async fn check_conflict(&self, slot: SlotKey) -> ConflictStatus {
        let mut form = AppointmentForm::new(Arc::clone(&self.checker));
        form.set_date(Some(slot.date));
        form.set_time(slot.time);
        form.set_provider(slot.provider);
        form.refresh_conflict().await.clone()
    }

    pub fn open_slots(&self, provider: &str, date: NaiveDate) -> Vec<&'static str> {
        self.checker.open_slots(provider, date)
    }

    pub async fn book(&self, request: BookingRequest) -> Result<BookingConfirmation> {
        let patient = self.directory.find_by_id(&request.patient_id)?;

        let mut form = AppointmentForm::new(Arc::clone(&self.checker))
            .with_submit_delay(self.config.delays.submit());
        form.set_patient(patient);
        form.set_date(Some(request.date));
        form.set_time(request.time);
        form.set_provider(request.provider);
        form.set_visit_type(request.visit_type);
        form.set_reason(request.reason);

        Ok(form.submit().await?)
    }

    pub async fn patients(&self, term: Option<&str>) -> Result<Vec<Patient>> {
        Ok(self.directory.lookup(term.unwrap_or_default()).await?)
    }

    pub async fn chat(&mut self, message: &str) -> Result<Reply> {
        Ok(self.assistant.respond(message).await?)
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    /// Fresh wizard honouring the configured delay and redirect
    pub fn onboarding_wizard(&self) -> OnboardingWizard {
        OnboardingWizard::new()
            .with_submit_delay(self.config.delays.submit())
            .with_redirect_path(self.config.onboarding.redirect_path.clone())
    }
}
