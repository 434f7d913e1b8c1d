//! Scripted chat assistant for the CareDesk front desk
//!
//! Not a dialogue engine: an ordered list of keyword rules is evaluated
//! once per message and the first match answers, otherwise a fallback
//! reply is given. Emergencies are matched before anything else.
//!
//! # Example
//!
//! ```rust
//! use chat_assistant::{Assistant, Intent};
//!
//! let mut assistant = Assistant::default();
//! let reply = assistant.reply("Can I reschedule my appointment?").unwrap();
//! assert_eq!(reply.intent, Intent::Appointment);
//! ```

pub mod rules;
pub mod assistant;
pub mod error;

pub use rules::*;
pub use assistant::*;
pub use error::*;
