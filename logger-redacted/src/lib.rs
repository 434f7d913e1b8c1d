//! Logging for CareDesk Engine with automatic redaction of patient identifiers
//!
//! Installs a `tracing-subscriber` registry driven by [`LoggerConfig`] and
//! keeps a process-wide [`PiiRedactor`] that the `redacted_*!` macros run
//! every message through. Front desk flows log patient ids, phone numbers
//! and emails; none of those should reach the log output verbatim.
//!
//! # Detected Data Types
//!
//! - **Email Addresses**: emma.t@example.com → e***@e***
//! - **Phone Numbers**: (555) 123-4567 → (***) ***-****
//! - **SSN**: 123-45-6789 → ***-**-****
//! - **Patient Ids**: P-1001 → P-****
//! - **Custom Patterns**: via [`RedactionConfig::with_custom_pattern`]
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init_logging, redacted_info, LoggerConfig};
//!
//! init_logging(&LoggerConfig::default()).expect("logger already installed");
//! redacted_info!("Booked {} for {}", "P-1001", "(555) 123-4567");
//! // Output: "Booked P-**** for (***) ***-****"
//! ```

pub mod redactor;
pub mod macros;
pub mod config;

pub use redactor::*;
pub use config::*;

#[doc(hidden)]
pub use tracing;

use std::sync::OnceLock;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static GLOBAL_REDACTOR: OnceLock<PiiRedactor> = OnceLock::new();

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("A global subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the global subscriber and redactor
pub fn init_logging(config: &LoggerConfig) -> Result<(), LoggerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.default_directive())
            .map_err(|e| LoggerError::InvalidFilter(e.to_string()))?,
    };

    install_redactor(config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(config.with_target)
                .with_level(true)
                .compact(),
        )
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Configure the process-wide redactor; first call wins
pub fn install_redactor(config: &LoggerConfig) {
    let redactor = PiiRedactor::new(RedactionConfig {
        enabled: config.redaction_enabled,
        hash_for_correlation: config.hash_for_correlation,
        ..Default::default()
    });
    if GLOBAL_REDACTOR.set(redactor).is_err() {
        tracing::debug!("redactor already installed, keeping existing configuration");
    }
}

/// Redact text with the global redactor (default config if never installed)
pub fn redact(text: &str) -> String {
    GLOBAL_REDACTOR.get_or_init(PiiRedactor::default).redact(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_redact_defaults_to_enabled() {
        assert_eq!(redact("patient P-1004"), "patient P-****");
    }

    #[test]
    fn test_macros_expand() {
        redacted_info!("checking {} at {}", "P-1002", "10:00 AM");
        redacted_warn!("conflict for {}", "P-1002");
        redacted_error!("lookup failed for {}", "noone@example.com");
    }
}
