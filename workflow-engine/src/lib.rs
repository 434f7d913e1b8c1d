//! Patient onboarding wizard for CareDesk Engine
//!
//! Four fixed, linear steps: basic information, medical history, insurance
//! and consent. Each step is a variant of [`StepState`] holding its own
//! form data and completion flag; the wizard is advanced by the pure
//! [`reduce`] function.
//!
//! - **Next** moves forward one step and is gated on the current step
//! - **Previous** moves back one step and is never gated
//! - **Submit** is gated on all four steps, waits the simulated delay,
//!   navigates away once and drops the entered data
//!
//! Medical history has no required fields and starts out complete.
//!
//! # Example
//!
//! ```rust
//! use workflow_engine::{OnboardingWizard, StepId, WizardAction};
//!
//! let mut wizard = OnboardingWizard::new();
//! assert_eq!(wizard.current_step(), StepId::BasicInfo);
//! assert!(!wizard.can_go_next());
//!
//! wizard.dispatch(WizardAction::SetCompletion(StepId::BasicInfo, true));
//! assert!(wizard.can_go_next());
//! assert_eq!(wizard.try_next().unwrap(), StepId::MedicalHistory);
//! ```

pub mod steps;
pub mod state_machine;
pub mod wizard;
pub mod error;

pub use steps::*;
pub use state_machine::*;
pub use wizard::*;
pub use error::*;
