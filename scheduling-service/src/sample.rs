//! Fixed catalogs and sample records the front desk screens are built on.
//! Nothing here is ever modified at runtime.

use chrono::NaiveDate;

use crate::models::{Appointment, Patient};

pub const PROVIDERS: [&str; 4] = [
    "Dr. Sarah Johnson",
    "Dr. Michael Chen",
    "Dr. Emily Rodriguez",
    "Dr. James Wilson",
];

pub const VISIT_TYPES: [&str; 5] = [
    "Check-up",
    "Follow-up",
    "Consultation",
    "Procedure",
    "Emergency",
];

pub const TIME_SLOTS: [&str; 16] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM",
    "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM",
    "01:00 PM", "01:30 PM", "02:00 PM", "02:30 PM",
    "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
];

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap_or_default()
}

fn booked(date: NaiveDate, time: &str, provider: &str, patient: &str, visit_type: &str) -> Appointment {
    Appointment {
        date,
        time: time.to_string(),
        provider: provider.to_string(),
        patient_name: patient.to_string(),
        visit_type: visit_type.to_string(),
    }
}

/// The booked appointments every conflict check runs against
pub fn existing_appointments() -> Vec<Appointment> {
    vec![
        booked(day(2025, 5, 25), "10:00 AM", "Dr. Sarah Johnson", "John Smith", "Check-up"),
        booked(day(2025, 5, 25), "11:30 AM", "Dr. Michael Chen", "Emma Thompson", "Follow-up"),
        booked(day(2025, 5, 26), "09:00 AM", "Dr. Emily Rodriguez", "Robert Garcia", "Consultation"),
        booked(day(2025, 5, 26), "02:00 PM", "Dr. Sarah Johnson", "Linda Martinez", "Follow-up"),
        booked(day(2025, 5, 27), "03:30 PM", "Dr. James Wilson", "David Lee", "Procedure"),
    ]
}

pub fn patients() -> Vec<Patient> {
    let patient = |id: &str, name: &str, dob: NaiveDate, phone: &str, email: &str| Patient {
        id: id.to_string(),
        name: name.to_string(),
        date_of_birth: dob,
        phone: phone.to_string(),
        email: email.to_string(),
    };

    vec![
        patient("P-1001", "John Smith", day(1975, 3, 12), "(555) 123-4567", "john.smith@example.com"),
        patient("P-1002", "Emma Thompson", day(1988, 7, 22), "(555) 234-5678", "emma.t@example.com"),
        patient("P-1003", "Robert Garcia", day(1962, 11, 5), "(555) 345-6789", "rgarcia@example.com"),
        patient("P-1004", "Linda Martinez", day(1990, 1, 30), "(555) 456-7890", "linda.m@example.com"),
        patient("P-1005", "David Lee", day(1983, 9, 17), "(555) 567-8901", "dlee@example.com"),
        patient("P-1006", "Sophia Brown", day(2001, 4, 8), "(555) 678-9012", "sophia.b@example.com"),
    ]
}

pub fn is_known_provider(name: &str) -> bool {
    PROVIDERS.contains(&name)
}

pub fn is_known_slot(label: &str) -> bool {
    TIME_SLOTS.contains(&label)
}

pub fn is_known_visit_type(name: &str) -> bool {
    VISIT_TYPES.contains(&name)
}
