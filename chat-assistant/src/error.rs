use error_common::CareDeskError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message is too long ({0} characters, limit {1})")]
    MessageTooLong(usize, usize),
}

pub type AssistantResult<T> = Result<T, AssistantError>;

impl From<AssistantError> for CareDeskError {
    fn from(err: AssistantError) -> Self {
        CareDeskError::AssistantError(err.to_string())
    }
}
