//! Scheduling Service for the CareDesk front desk
//!
//! Provides the logic behind the appointment booking screen:
//! - Exact-match slot conflict detection against the booked sample set
//! - The candidate appointment form with conflict status and submit gating
//! - Patient directory search used to pick the patient being booked
//! - The fixed provider, slot and visit type catalogs

pub mod models;
pub mod sample;
pub mod conflict;
pub mod form;
pub mod patients;
pub mod error;

pub use models::*;
pub use conflict::*;
pub use form::*;
pub use patients::*;
pub use error::*;
