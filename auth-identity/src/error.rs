use error_common::CareDeskError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

pub type Result<T> = std::result::Result<T, IdentityError>;

impl From<IdentityError> for CareDeskError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::UnknownRole(role) => CareDeskError::UnknownRole(role),
            IdentityError::NotLoggedIn => CareDeskError::SessionError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_onto_session_categories() {
        let err: CareDeskError = IdentityError::NotLoggedIn.into();
        assert!(matches!(err, CareDeskError::SessionError(ref m) if m == "Not logged in"));

        let err: CareDeskError = IdentityError::UnknownRole("janitor".to_string()).into();
        assert!(matches!(err, CareDeskError::UnknownRole(ref r) if r == "janitor"));
    }
}
