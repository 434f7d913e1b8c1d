//! Configuration for CareDesk Engine
//!
//! Settings are layered with `figment`, later sources overriding earlier ones:
//!
//! 1. Built-in defaults ([`CareDeskConfig::default`])
//! 2. An optional YAML or TOML file (picked by extension)
//! 3. Environment variables prefixed with `CAREDESK_`, `__` separating
//!    nested keys (`CAREDESK_DELAYS__SUBMIT_MS=0`)
//!
//! # Example
//!
//! ```rust,no_run
//! use config_engine::ConfigLoader;
//!
//! let config = ConfigLoader::new()
//!     .with_file("caredesk.yaml")
//!     .load()?;
//! println!("conflict check takes {:?}", config.delays.conflict_check());
//! # Ok::<(), config_engine::ConfigError>(())
//! ```

pub mod settings;
pub mod validation;
pub mod error;

pub use settings::*;
pub use error::*;

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CAREDESK_";

/// Builds a [`CareDeskConfig`] from defaults, an optional file and the environment
#[derive(Debug)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    require_file: bool,
    use_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            file: None,
            require_file: false,
            use_env: true,
        }
    }

    /// Layer a config file over the defaults; silently skipped if absent
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Fail instead of skipping when the file does not exist
    pub fn require_file(mut self) -> Self {
        self.require_file = true;
        self
    }

    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(CareDeskConfig::default()));

        if let Some(path) = &self.file {
            if !path.exists() {
                if self.require_file {
                    return Err(ConfigError::SourceNotFound(path.display().to_string()));
                }
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
            } else {
                figment = match path.extension().and_then(|ext| ext.to_str()) {
                    Some("toml") => figment.merge(Toml::file(path)),
                    Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                    other => {
                        return Err(ConfigError::ParseError(format!(
                            "unsupported config format: {}",
                            other.unwrap_or("<none>")
                        )))
                    }
                };
            }
        }

        if self.use_env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        }

        Ok(figment)
    }

    /// Extract and validate the configuration
    pub fn load(&self) -> Result<CareDeskConfig> {
        let config: CareDeskConfig = self.figment()?.extract()?;
        validation::validate(&config)?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}
