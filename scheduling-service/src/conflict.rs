use std::time::Duration;

use crate::models::{Appointment, ConflictCheck, SlotKey};
use crate::sample;

/// Exact-match slot conflict detection over a fixed appointment set
///
/// A slot conflicts only when a booked appointment has the same calendar
/// day, the same slot label and the same provider name. Abutting or
/// overlapping slots are not conflicts.
#[derive(Debug, Clone)]
pub struct ConflictChecker {
    appointments: Vec<Appointment>,
    delay: Duration,
}

impl ConflictChecker {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments,
            delay: Duration::ZERO,
        }
    }

    /// Checker over the built-in booked appointments
    pub fn with_sample_data() -> Self {
        Self::new(sample::existing_appointments())
    }

    /// Simulated latency applied by [`ConflictChecker::check`]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn has_conflict(&self, slot: &SlotKey) -> bool {
        self.appointments.iter().any(|booked| booked.occupies(slot))
    }

    /// Run the check after the configured delay; cannot fail
    pub async fn check(&self, slot: &SlotKey) -> ConflictCheck {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let has_conflict = self.has_conflict(slot);
        tracing::debug!(
            date = %slot.day_label(),
            time = %slot.time,
            provider = %slot.provider,
            has_conflict,
            "slot conflict check"
        );

        ConflictCheck {
            slot: slot.clone(),
            has_conflict,
        }
    }

    /// Booked appointments for one provider on one day
    pub fn booked_for(&self, provider: &str, date: chrono::NaiveDate) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|booked| booked.provider == provider && booked.date == date)
            .collect()
    }

    /// Slot labels still free for a provider on a day
    pub fn open_slots(&self, provider: &str, date: chrono::NaiveDate) -> Vec<&'static str> {
        sample::TIME_SLOTS
            .iter()
            .copied()
            .filter(|label| !self.has_conflict(&SlotKey::new(date, *label, provider)))
            .collect()
    }
}

impl Default for ConflictChecker {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn may(dom: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, dom).unwrap()
    }

    #[test]
    fn test_booked_slot_conflicts() {
        let checker = ConflictChecker::with_sample_data();
        assert!(checker.has_conflict(&SlotKey::new(may(25), "10:00 AM", "Dr. Sarah Johnson")));
    }

    #[test]
    fn test_other_provider_same_slot_is_free() {
        let checker = ConflictChecker::with_sample_data();
        assert!(!checker.has_conflict(&SlotKey::new(may(25), "10:00 AM", "Dr. Michael Chen")));
    }

    #[test]
    fn test_adjacent_slot_is_not_a_conflict() {
        let checker = ConflictChecker::with_sample_data();
        assert!(!checker.has_conflict(&SlotKey::new(may(25), "10:30 AM", "Dr. Sarah Johnson")));
        assert!(!checker.has_conflict(&SlotKey::new(may(25), "09:30 AM", "Dr. Sarah Johnson")));
    }

    #[test]
    fn test_empty_set_never_conflicts() {
        let checker = ConflictChecker::new(Vec::new());
        assert!(!checker.has_conflict(&SlotKey::new(may(25), "10:00 AM", "Dr. Sarah Johnson")));
    }

    #[test]
    fn test_open_slots_skip_booked() {
        let checker = ConflictChecker::with_sample_data();
        let open = checker.open_slots("Dr. Sarah Johnson", may(25));
        assert_eq!(open.len(), sample::TIME_SLOTS.len() - 1);
        assert!(!open.contains(&"10:00 AM"));
        assert_eq!(checker.booked_for("Dr. Sarah Johnson", may(25)).len(), 1);
    }

    #[tokio::test]
    async fn test_async_check_reports_slot() {
        let checker = ConflictChecker::with_sample_data().with_delay(Duration::from_millis(1));
        let slot = SlotKey::new(may(26), "02:00 PM", "Dr. Sarah Johnson");
        let result = checker.check(&slot).await;
        assert!(result.has_conflict);
        assert_eq!(result.slot, slot);
    }
}
