// Toast notifications shown for user-visible outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::CareDeskError;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
    Info,
}

/// Transient toast shown to the user; never stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }
}

impl From<&CareDeskError> for Notification {
    fn from(error: &CareDeskError) -> Self {
        let title = match error {
            CareDeskError::ValidationError(_) => "Please check the form",
            CareDeskError::ConflictError(_) => "Scheduling conflict",
            CareDeskError::NotFound(_) => "Nothing found",
            CareDeskError::WorkflowError(_) => "Cannot continue yet",
            CareDeskError::SessionError(_) | CareDeskError::UnknownRole(_) => "Please sign in again",
            CareDeskError::AssistantError(_) => "Assistant",
            CareDeskError::ConfigError(_) | CareDeskError::Other(_) => "Something went wrong",
        };
        // Conflicts are a warning banner in the scheduling form, not a hard failure
        let kind = match error {
            CareDeskError::ConflictError(_) => NotificationKind::Warning,
            _ => NotificationKind::Error,
        };
        Self::new(kind, title, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_becomes_warning() {
        let err = CareDeskError::ConflictError("slot taken".to_string());
        let toast = Notification::from(&err);
        assert_eq!(toast.kind, NotificationKind::Warning);
        assert_eq!(toast.title, "Scheduling conflict");
        assert!(toast.message.contains("slot taken"));
    }

    #[test]
    fn test_serializes_kind_lowercase() {
        let toast = Notification::success("Saved", "Appointment booked");
        let json = serde_json::to_value(&toast).unwrap();
        assert_eq!(json["kind"], "success");
        assert_eq!(json["title"], "Saved");
    }
}
