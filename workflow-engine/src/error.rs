use error_common::CareDeskError;
use thiserror::Error;

use crate::steps::StepId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Step '{}' is not complete", .0.title())]
    StepNotComplete(StepId),

    #[error("Already at the last step")]
    NoNextStep,

    #[error("Onboarding cannot be submitted, incomplete steps: {}", join_titles(.0))]
    StepsIncomplete(Vec<StepId>),
}

fn join_titles(steps: &[StepId]) -> String {
    steps.iter().map(|s| s.title()).collect::<Vec<_>>().join(", ")
}

pub type Result<T> = std::result::Result<T, WorkflowError>;

impl From<WorkflowError> for CareDeskError {
    fn from(err: WorkflowError) -> Self {
        CareDeskError::WorkflowError(err.to_string())
    }
}
