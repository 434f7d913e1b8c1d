//! Common error handling utilities for CareDesk Engine
//!
//! This crate provides the error type shared by the front desk crates, the
//! stable error codes attached to it, and the toast-style [`Notification`]
//! that user-visible failures (and successes) are turned into.
//!
//! Each domain crate keeps its own `thiserror` enum and converts into
//! [`CareDeskError`] at the boundary where several domains meet, typically
//! the `caredesk` binary.
//!
//! # Error Categories
//!
//! - **Validation**: a form or wizard step is missing or has malformed input
//! - **Scheduling**: appointment slot conflicts and patient lookups
//! - **Workflow**: onboarding wizard gating violations
//! - **Session**: login state and role resolution
//! - **Assistant**: scripted chat input problems
//! - **Config**: configuration loading and validation
//!
//! # Example
//!
//! ```rust
//! use error_common::{CareDeskError, Notification, NotificationKind};
//!
//! let err = CareDeskError::NotFound("no patient found for 'zed'".to_string());
//! assert_eq!(err.code(), error_common::codes::scheduling::PATIENT_NOT_FOUND);
//!
//! let toast = Notification::from(&err);
//! assert_eq!(toast.kind, NotificationKind::Error);
//! ```

pub mod types;
pub mod codes;
pub mod reporting;

pub use types::*;
pub use reporting::*;
