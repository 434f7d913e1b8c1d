use std::time::Duration;

use logger_redacted::LoggerConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CareDeskConfig {
    pub delays: DelaySettings,
    pub logging: LoggerConfig,
    pub onboarding: OnboardingSettings,
}

/// Simulated latency for the mocked backend calls, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelaySettings {
    pub conflict_check_ms: u64,
    pub search_ms: u64,
    pub submit_ms: u64,
    pub chat_typing_ms: u64,
}

impl Default for DelaySettings {
    fn default() -> Self {
        Self {
            conflict_check_ms: 500,
            search_ms: 800,
            submit_ms: 1500,
            chat_typing_ms: 1000,
        }
    }
}

impl DelaySettings {
    /// All delays zeroed, for tests and scripted runs
    pub fn instant() -> Self {
        Self {
            conflict_check_ms: 0,
            search_ms: 0,
            submit_ms: 0,
            chat_typing_ms: 0,
        }
    }

    pub fn conflict_check(&self) -> Duration {
        Duration::from_millis(self.conflict_check_ms)
    }

    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn submit(&self) -> Duration {
        Duration::from_millis(self.submit_ms)
    }

    pub fn chat_typing(&self) -> Duration {
        Duration::from_millis(self.chat_typing_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingSettings {
    /// Where the wizard navigates after a successful submit
    pub redirect_path: String,
}

impl Default for OnboardingSettings {
    fn default() -> Self {
        Self {
            redirect_path: "/patients".to_string(),
        }
    }
}
