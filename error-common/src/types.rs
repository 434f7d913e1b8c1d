use thiserror::Error;

use crate::codes;

/// Error enum shared across CareDesk crates
#[derive(Error, Debug)]
pub enum CareDeskError {
    /// Missing or malformed user input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Requested slot is already booked
    #[error("Scheduling conflict: {0}")]
    ConflictError(String),

    /// Lookup produced no result
    #[error("Not found: {0}")]
    NotFound(String),

    /// Wizard action attempted before its gate opened
    #[error("Workflow error: {0}")]
    WorkflowError(String),

    /// Session missing or holding an unusable value
    #[error("Session error: {0}")]
    SessionError(String),

    /// Unrecognized role string
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Scripted assistant rejected the message
    #[error("Assistant error: {0}")]
    AssistantError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CareDeskError {
    /// Stable code for this error, see [`crate::codes`]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => codes::validation::INVALID_INPUT,
            Self::ConflictError(_) => codes::scheduling::SLOT_CONFLICT,
            Self::NotFound(_) => codes::scheduling::PATIENT_NOT_FOUND,
            Self::WorkflowError(_) => codes::workflow::STEPS_INCOMPLETE,
            Self::SessionError(_) => codes::session::NOT_LOGGED_IN,
            Self::UnknownRole(_) => codes::session::UNKNOWN_ROLE,
            Self::AssistantError(_) => codes::assistant::MESSAGE_REJECTED,
            Self::ConfigError(_) => codes::system::CONFIGURATION,
            Self::Other(_) => codes::system::INTERNAL,
        }
    }

    /// Short category name used in log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "validation",
            Self::ConflictError(_) => "conflict",
            Self::NotFound(_) => "not_found",
            Self::WorkflowError(_) => "workflow",
            Self::SessionError(_) | Self::UnknownRole(_) => "session",
            Self::AssistantError(_) => "assistant",
            Self::ConfigError(_) => "config",
            Self::Other(_) => "internal",
        }
    }

    /// Whether the user can fix this by changing their input
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, Self::ConfigError(_) | Self::Other(_))
    }
}

/// Result type alias for CareDesk operations
pub type Result<T> = std::result::Result<T, CareDeskError>;

/// Log an error with its code and category
pub fn log_error(context: &str, error: &CareDeskError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error_type = error.error_type(),
        error = %error,
        "CareDesk error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_category() {
        let err = CareDeskError::ConflictError("Dr. Sarah Johnson at 10:00 AM".to_string());
        assert_eq!(err.code(), codes::scheduling::SLOT_CONFLICT);
        assert_eq!(err.error_type(), "conflict");
        assert!(err.is_user_correctable());

        let err = CareDeskError::ConfigError("bad delay".to_string());
        assert_eq!(err.code(), codes::system::CONFIGURATION);
        assert!(!err.is_user_correctable());
    }

    #[test]
    fn test_assistant_errors_share_category_code() {
        for message in ["Message is empty", "Message is too long (1200 characters, limit 1000)"] {
            let err = CareDeskError::AssistantError(message.to_string());
            assert_eq!(err.code(), codes::assistant::MESSAGE_REJECTED);
            assert_eq!(err.error_type(), "assistant");
        }
    }

    #[test]
    fn test_anyhow_is_wrapped_transparently() {
        let err: CareDeskError = anyhow::anyhow!("disk on fire").into();
        assert_eq!(err.to_string(), "disk on fire");
        assert_eq!(err.error_type(), "internal");
    }
}
