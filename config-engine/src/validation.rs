// Configuration validation
use crate::error::{ConfigError, Result};
use crate::settings::CareDeskConfig;

/// Upper bound on any simulated delay
pub const MAX_DELAY_MS: u64 = 60_000;

pub fn validate(config: &CareDeskConfig) -> Result<()> {
    let delays = [
        ("delays.conflict_check_ms", config.delays.conflict_check_ms),
        ("delays.search_ms", config.delays.search_ms),
        ("delays.submit_ms", config.delays.submit_ms),
        ("delays.chat_typing_ms", config.delays.chat_typing_ms),
    ];
    for (key, value) in delays {
        if value > MAX_DELAY_MS {
            return Err(ConfigError::ValidationError(format!(
                "{key} must be at most {MAX_DELAY_MS}, got {value}"
            )));
        }
    }

    if config.onboarding.redirect_path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "onboarding.redirect_path must not be blank".to_string(),
        ));
    }

    if config.logging.log_level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.log_level must not be blank".to_string(),
        ));
    }

    Ok(())
}
