use error_common::CareDeskError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{provider} already has an appointment on {date} at {time}")]
    Conflict {
        date: String,
        time: String,
        provider: String,
    },

    #[error("No patient found matching '{0}'")]
    PatientNotFound(String),
}

pub type SchedulingResult<T> = Result<T, SchedulingError>;

impl From<SchedulingError> for CareDeskError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::MissingField(_)
            | SchedulingError::UnknownValue { .. }
            | SchedulingError::InvalidDate(_) => {
                CareDeskError::ValidationError(err.to_string())
            }
            SchedulingError::Conflict { .. } => CareDeskError::ConflictError(err.to_string()),
            SchedulingError::PatientNotFound(_) => CareDeskError::NotFound(err.to_string()),
        }
    }
}
