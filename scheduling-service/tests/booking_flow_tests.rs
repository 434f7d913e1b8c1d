//! Booking screen scenarios
//!
//! These walk the appointment form the way the front desk uses it:
//! pick a patient, choose a slot, react to the conflict banner, book.

use std::sync::Arc;

use chrono::NaiveDate;
use error_common::CareDeskError;
use proptest::prelude::*;
use scheduling_service::sample::{existing_appointments, PROVIDERS, TIME_SLOTS};
use scheduling_service::*;

fn may(dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, dom).unwrap()
}

fn new_form() -> AppointmentForm {
    AppointmentForm::new(Arc::new(ConflictChecker::with_sample_data()))
}

#[test]
fn test_reference_examples() {
    let checker = ConflictChecker::with_sample_data();
    assert!(checker.has_conflict(&SlotKey::new(may(25), "10:00 AM", "Dr. Sarah Johnson")));
    assert!(!checker.has_conflict(&SlotKey::new(may(25), "10:00 AM", "Dr. Michael Chen")));
}

#[tokio::test]
async fn test_receptionist_resolves_conflict_by_changing_each_field() {
    let directory = PatientDirectory::with_sample_data();
    let patient = directory.lookup("Emma").await.unwrap().remove(0);

    let mut form = new_form();
    form.set_patient(&patient);
    form.set_visit_type("Follow-up");
    form.set_date(Some(may(25)));
    form.set_time("10:00 AM");
    form.set_provider("Dr. Sarah Johnson");
    assert!(form.refresh_conflict().await.has_conflict());

    // new time
    form.set_time("10:30 AM");
    assert!(!form.refresh_conflict().await.has_conflict());

    // back to the booked slot, then move the date
    form.set_time("10:00 AM");
    assert!(form.refresh_conflict().await.has_conflict());
    form.set_date(Some(may(28)));
    assert!(!form.refresh_conflict().await.has_conflict());

    // back again, then change provider
    form.set_date(Some(may(25)));
    assert!(form.refresh_conflict().await.has_conflict());
    form.set_provider("Dr. Emily Rodriguez");
    assert!(!form.refresh_conflict().await.has_conflict());

    let confirmation = form.submit().await.unwrap();
    assert_eq!(confirmation.appointment.patient_id.as_deref(), Some("P-1002"));
}

#[tokio::test]
async fn test_submit_without_explicit_check_still_detects_conflict() {
    let mut form = new_form();
    form.set_patient(&PatientDirectory::with_sample_data().find_by_id("P-1004").unwrap().clone());
    form.set_visit_type("Follow-up");
    form.set_date(Some(may(26)));
    form.set_time("02:00 PM");
    form.set_provider("Dr. Sarah Johnson");

    let err: CareDeskError = form.submit().await.unwrap_err().into();
    assert!(matches!(err, CareDeskError::ConflictError(_)));
}

#[tokio::test]
async fn test_booking_never_changes_the_booked_set() {
    let checker = Arc::new(ConflictChecker::with_sample_data());
    let mut form = AppointmentForm::new(Arc::clone(&checker));
    form.set_patient(&PatientDirectory::with_sample_data().all()[0].clone());
    form.set_visit_type("Check-up");
    form.set_date(Some(may(30)));
    form.set_time("09:00 AM");
    form.set_provider("Dr. James Wilson");
    form.submit().await.unwrap();

    assert_eq!(checker.appointments(), existing_appointments().as_slice());
    assert!(!checker.has_conflict(&SlotKey::new(may(30), "09:00 AM", "Dr. James Wilson")));
}

#[test]
fn test_patient_not_found_maps_to_not_found() {
    let err: CareDeskError = PatientDirectory::with_sample_data()
        .search("xyz")
        .unwrap_err()
        .into();
    assert_eq!(err.code(), error_common::codes::scheduling::PATIENT_NOT_FOUND);
}

fn slot_strategy() -> impl Strategy<Value = SlotKey> {
    (
        20u32..31,
        prop::sample::select(TIME_SLOTS.to_vec()),
        prop::sample::select(PROVIDERS.to_vec()),
    )
        .prop_map(|(dom, time, provider)| SlotKey::new(may(dom), time, provider))
}

proptest! {
    #[test]
    fn prop_conflict_iff_exact_triple_match(slot in slot_strategy()) {
        let checker = ConflictChecker::with_sample_data();
        let expected = existing_appointments().iter().any(|a| {
            a.date == slot.date && a.time == slot.time && a.provider == slot.provider
        });
        prop_assert_eq!(checker.has_conflict(&slot), expected);
    }

    #[test]
    fn prop_booked_slots_always_conflict(index in 0usize..5) {
        let checker = ConflictChecker::with_sample_data();
        let booked = &existing_appointments()[index];
        prop_assert!(checker.has_conflict(&booked.slot()));
    }
}

#[tokio::test]
async fn test_near_miss_spellings_of_booked_slot_are_refused() {
    let variants = [
        ("10:00 am", "Dr. Sarah Johnson"),
        (" 10:00 AM", "Dr. Sarah Johnson"),
        ("10:00 AM", "dr. sarah johnson"),
        ("10:00 AM", "Dr. Sarah Johnson "),
    ];
    let patient = PatientDirectory::with_sample_data().find_by_id("P-1001").unwrap().clone();

    for (time, provider) in variants {
        let mut form = new_form();
        form.set_patient(&patient);
        form.set_visit_type("Check-up");
        form.set_date(Some(may(25)));
        form.set_time(time);
        form.set_provider(provider);

        form.refresh_conflict().await;
        assert!(!form.can_submit(), "{time:?} / {provider:?}");
        let err = form.submit().await.unwrap_err();
        assert!(matches!(err, SchedulingError::UnknownValue { .. }), "{time:?} / {provider:?}");
    }
}

#[tokio::test]
async fn test_unknown_visit_type_is_refused() {
    let mut form = new_form();
    form.set_patient(&PatientDirectory::with_sample_data().all()[0].clone());
    form.set_visit_type("Nonsense");
    form.set_date(Some(may(25)));
    form.set_time("10:00 AM");
    form.set_provider("Dr. Michael Chen");

    let err: CareDeskError = form.submit().await.unwrap_err().into();
    assert!(matches!(err, CareDeskError::ValidationError(_)));
}
