use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SchedulingError, SchedulingResult};

/// Calendar-day format used when comparing dates
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_day(value: &str) -> SchedulingResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT)
        .map_err(|_| SchedulingError::InvalidDate(value.to_string()))
}

/// An already-booked appointment from the fixed sample set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub date: NaiveDate,
    /// Slot label such as "10:00 AM"
    pub time: String,
    pub provider: String,
    /// Display only, never compared
    pub patient_name: String,
    /// Display only, never compared
    pub visit_type: String,
}

impl Appointment {
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(self.date, self.time.clone(), self.provider.clone())
    }

    /// Exact match on formatted day, slot label and provider name
    pub fn occupies(&self, slot: &SlotKey) -> bool {
        self.date.format(DAY_FORMAT).to_string() == slot.day_label()
            && self.time == slot.time
            && self.provider == slot.provider
    }
}

/// The (date, time, provider) triple a conflict check runs on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub time: String,
    pub provider: String,
}

impl SlotKey {
    pub fn new(date: NaiveDate, time: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            date,
            time: time.into(),
            provider: provider.into(),
        }
    }

    /// Build a key only when every part is present and non-blank
    pub fn from_parts(date: Option<NaiveDate>, time: Option<&str>, provider: Option<&str>) -> Option<Self> {
        let date = date?;
        let time = time.filter(|t| !t.trim().is_empty())?;
        let provider = provider.filter(|p| !p.trim().is_empty())?;
        Some(Self::new(date, time, provider))
    }

    pub fn day_label(&self) -> String {
        self.date.format(DAY_FORMAT).to_string()
    }
}

/// Outcome of one conflict check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCheck {
    pub slot: SlotKey,
    pub has_conflict: bool,
}

/// A patient in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// e.g. "P-1001"
    pub id: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub email: String,
}

/// The appointment being entered on the booking form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateAppointment {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub provider: Option<String>,
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub visit_type: Option<String>,
    pub reason: String,
}

impl CandidateAppointment {
    pub fn slot(&self) -> Option<SlotKey> {
        SlotKey::from_parts(self.date, self.time.as_deref(), self.provider.as_deref())
    }

    /// First missing required field, in form order
    pub fn first_missing(&self) -> Option<&'static str> {
        fn blank(value: &Option<String>) -> bool {
            value.as_deref().map_or(true, |v| v.trim().is_empty())
        }

        if self.patient_id.is_none() || blank(&self.patient_name) {
            Some("patient")
        } else if self.date.is_none() {
            Some("date")
        } else if blank(&self.time) {
            Some("time")
        } else if blank(&self.provider) {
            Some("provider")
        } else if blank(&self.visit_type) {
            Some("type")
        } else {
            None
        }
    }
}
