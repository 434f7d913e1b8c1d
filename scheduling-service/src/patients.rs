use std::time::Duration;

use logger_redacted::redacted_warn;

use crate::error::{SchedulingError, SchedulingResult};
use crate::models::Patient;
use crate::sample;

/// Searchable patient roster
#[derive(Debug, Clone)]
pub struct PatientDirectory {
    patients: Vec<Patient>,
    delay: Duration,
}

impl PatientDirectory {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients,
            delay: Duration::ZERO,
        }
    }

    pub fn with_sample_data() -> Self {
        Self::new(sample::patients())
    }

    /// Simulated latency applied by [`PatientDirectory::lookup`]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn all(&self) -> &[Patient] {
        &self.patients
    }

    /// Case-insensitive substring match on name or id
    ///
    /// A blank term lists everyone.
    pub fn search(&self, term: &str) -> SchedulingResult<Vec<&Patient>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(self.patients.iter().collect());
        }

        let matches: Vec<&Patient> = self
            .patients
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle) || p.id.to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            redacted_warn!("No patient found for search term {}", term.trim());
            return Err(SchedulingError::PatientNotFound(term.trim().to_string()));
        }
        Ok(matches)
    }

    pub fn find_by_id(&self, id: &str) -> SchedulingResult<&Patient> {
        self.patients
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| SchedulingError::PatientNotFound(id.trim().to_string()))
    }

    /// [`PatientDirectory::search`] behind the simulated delay, returning owned records
    pub async fn lookup(&self, term: &str) -> SchedulingResult<Vec<Patient>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.search(term)?.into_iter().cloned().collect())
    }
}

impl Default for PatientDirectory {
    fn default() -> Self {
        Self::with_sample_data()
    }
}
