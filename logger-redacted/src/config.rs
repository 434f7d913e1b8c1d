// Logger configuration
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub redaction_enabled: bool,
    pub hash_for_correlation: bool,
    pub log_level: String,
    pub with_target: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            redaction_enabled: true,
            hash_for_correlation: false,
            log_level: "info".to_string(),
            with_target: false,
        }
    }
}

impl LoggerConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn default_directive(&self) -> String {
        format!("{level},caredesk={level}", level = self.log_level)
    }
}
