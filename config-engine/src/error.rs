use error_common::CareDeskError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration source not found: {0}")]
    SourceNotFound(String),

    #[error("Configuration parsing failed: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ConfigError> for CareDeskError {
    fn from(err: ConfigError) -> Self {
        CareDeskError::ConfigError(err.to_string())
    }
}
