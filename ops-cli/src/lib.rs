//! CareDesk front-desk terminal
//!
//! Drives the scheduling, onboarding, session and assistant crates from
//! the command line:
//!
//! ```bash
//! caredesk login --role receptionist
//! caredesk check-conflict --date 2025-05-25 --time "10:00 AM" --provider "Dr. Sarah Johnson"
//! caredesk book --patient P-1001 --date 2025-05-27 --time "09:30 AM" \
//!     --provider "Dr. Michael Chen" --type "Follow-up"
//! caredesk onboard
//! caredesk patients smith
//! caredesk chat "what are your office hours?"
//! ```
//!
//! Delays come from configuration; `--instant` zeroes them.

pub mod app;
pub mod cli;
pub mod commands;
pub mod onboard;
pub mod output;

pub use app::{App, BookingRequest};
pub use cli::{Cli, Command};
