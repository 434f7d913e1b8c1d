use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use error_common::Notification;
use logger_redacted::redacted_info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conflict::ConflictChecker;
use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{CandidateAppointment, Patient, SlotKey};
use crate::sample;

/// Conflict state of the slot currently entered on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "slot", rename_all = "snake_case")]
pub enum ConflictStatus {
    /// Triple incomplete, or changed since the last check
    Unchecked,
    Checking(SlotKey),
    Clear(SlotKey),
    Conflict(SlotKey),
}

impl ConflictStatus {
    pub fn has_conflict(&self) -> bool {
        matches!(self, ConflictStatus::Conflict(_))
    }

    /// Text of the warning/success banner under the slot pickers
    pub fn banner(&self) -> Option<String> {
        match self {
            ConflictStatus::Unchecked => None,
            ConflictStatus::Checking(_) => Some("Checking availability...".to_string()),
            ConflictStatus::Clear(slot) => Some(format!(
                "{} is available on {} at {}",
                slot.provider,
                slot.day_label(),
                slot.time
            )),
            ConflictStatus::Conflict(slot) => Some(format!(
                "Scheduling conflict: {} already has an appointment on {} at {}. Please choose another time or provider.",
                slot.provider,
                slot.day_label(),
                slot.time
            )),
        }
    }
}

/// Result of a successful booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub reference: Uuid,
    pub appointment: CandidateAppointment,
    pub notification: Notification,
}

/// State behind the "Schedule Appointment" form
///
/// Every change to date, time or provider drops the previous conflict
/// result, so a flag computed for an old triple is never shown against a
/// new one. The booked appointment set is read-only; submitting only
/// discards the candidate.
#[derive(Debug)]
pub struct AppointmentForm {
    candidate: CandidateAppointment,
    status: ConflictStatus,
    checker: Arc<ConflictChecker>,
    submit_delay: Duration,
}

impl AppointmentForm {
    pub fn new(checker: Arc<ConflictChecker>) -> Self {
        Self {
            candidate: CandidateAppointment::default(),
            status: ConflictStatus::Unchecked,
            checker,
            submit_delay: Duration::ZERO,
        }
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn candidate(&self) -> &CandidateAppointment {
        &self.candidate
    }

    pub fn status(&self) -> &ConflictStatus {
        &self.status
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.candidate.date = date;
        self.status = ConflictStatus::Unchecked;
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.candidate.time = Some(time.into());
        self.status = ConflictStatus::Unchecked;
    }

    pub fn set_provider(&mut self, provider: impl Into<String>) {
        self.candidate.provider = Some(provider.into());
        self.status = ConflictStatus::Unchecked;
    }

    pub fn set_patient(&mut self, patient: &Patient) {
        self.candidate.patient_id = Some(patient.id.clone());
        self.candidate.patient_name = Some(patient.name.clone());
    }

    pub fn clear_patient(&mut self) {
        self.candidate.patient_id = None;
        self.candidate.patient_name = None;
    }

    pub fn set_visit_type(&mut self, visit_type: impl Into<String>) {
        self.candidate.visit_type = Some(visit_type.into());
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.candidate.reason = reason.into();
    }

    /// Re-run the conflict check for the current triple
    ///
    /// Leaves the status `Unchecked` when the triple is incomplete.
    pub async fn refresh_conflict(&mut self) -> &ConflictStatus {
        let Some(slot) = self.candidate.slot() else {
            self.status = ConflictStatus::Unchecked;
            return &self.status;
        };

        self.status = ConflictStatus::Checking(slot.clone());
        let result = self.checker.check(&slot).await;
        self.status = if result.has_conflict {
            ConflictStatus::Conflict(result.slot)
        } else {
            ConflictStatus::Clear(result.slot)
        };
        &self.status
    }

    /// Every required field present, and slot, provider and visit type
    /// taken verbatim from the catalogs the pickers offer
    pub fn validate(&self) -> SchedulingResult<()> {
        if let Some(field) = self.candidate.first_missing() {
            return Err(SchedulingError::MissingField(field));
        }

        let checks: [(&'static str, &Option<String>, fn(&str) -> bool); 3] = [
            ("time", &self.candidate.time, sample::is_known_slot),
            ("provider", &self.candidate.provider, sample::is_known_provider),
            ("visit type", &self.candidate.visit_type, sample::is_known_visit_type),
        ];
        for (field, value, known) in checks {
            let value = value.as_deref().unwrap_or_default();
            if !known(value) {
                return Err(SchedulingError::UnknownValue {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        if self.validate().is_err() {
            return false;
        }
        match (&self.status, self.candidate.slot()) {
            (ConflictStatus::Clear(checked), Some(current)) => *checked == current,
            _ => false,
        }
    }

    /// Book the candidate after the simulated delay
    ///
    /// Runs the conflict check first if the current triple has not been
    /// checked. On success the form is reset.
    pub async fn submit(&mut self) -> SchedulingResult<BookingConfirmation> {
        self.validate()?;

        let checked = matches!(
            (&self.status, self.candidate.slot()),
            (ConflictStatus::Clear(s) | ConflictStatus::Conflict(s), Some(current)) if *s == current
        );
        if !checked {
            self.refresh_conflict().await;
        }

        if let ConflictStatus::Conflict(slot) = &self.status {
            return Err(SchedulingError::Conflict {
                date: slot.day_label(),
                time: slot.time.clone(),
                provider: slot.provider.clone(),
            });
        }

        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        let appointment = std::mem::take(&mut self.candidate);
        self.status = ConflictStatus::Unchecked;

        let patient_name = appointment.patient_name.clone().unwrap_or_default();
        let provider = appointment.provider.clone().unwrap_or_default();
        let time = appointment.time.clone().unwrap_or_default();
        let day = appointment
            .date
            .map(|d| d.format(crate::models::DAY_FORMAT).to_string())
            .unwrap_or_default();

        redacted_info!(
            "Appointment booked for {} with {} on {} at {}",
            appointment.patient_id.as_deref().unwrap_or("unknown"),
            provider,
            day,
            time
        );

        let notification = Notification::success(
            "Appointment scheduled",
            format!("{patient_name} is booked with {provider} on {day} at {time}"),
        );

        Ok(BookingConfirmation {
            reference: Uuid::new_v4(),
            appointment,
            notification,
        })
    }

    /// Discard everything entered so far
    pub fn cancel(&mut self) {
        self.candidate = CandidateAppointment::default();
        self.status = ConflictStatus::Unchecked;
    }
}
