//! Layering tests for the configuration loader
//!
//! `figment::Jail` gives each test its own working directory and
//! environment, so files and `CAREDESK_*` variables do not leak between tests.

use config_engine::{ConfigError, ConfigLoader, DelaySettings};
use figment::Jail;

#[test]
fn test_defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.delays, DelaySettings::default());
        assert_eq!(config.delays.conflict_check_ms, 500);
        assert_eq!(config.onboarding.redirect_path, "/patients");
        assert!(config.logging.redaction_enabled);
        Ok(())
    });
}

#[test]
fn test_yaml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "caredesk.yaml",
            r#"
delays:
  submit_ms: 0
  search_ms: 25
onboarding:
  redirect_path: /dashboard
"#,
        )?;

        let config = ConfigLoader::new().with_file("caredesk.yaml").load().unwrap();
        assert_eq!(config.delays.submit_ms, 0);
        assert_eq!(config.delays.search_ms, 25);
        // untouched keys keep their defaults
        assert_eq!(config.delays.chat_typing_ms, 1000);
        assert_eq!(config.onboarding.redirect_path, "/dashboard");
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("caredesk.toml", "[delays]\nconflict_check_ms = 100\n")?;
        jail.set_env("CAREDESK_DELAYS__CONFLICT_CHECK_MS", "7");
        jail.set_env("CAREDESK_LOGGING__LOG_LEVEL", "debug");

        let config = ConfigLoader::new().with_file("caredesk.toml").load().unwrap();
        assert_eq!(config.delays.conflict_check_ms, 7);
        assert_eq!(config.logging.log_level, "debug");
        Ok(())
    });
}

#[test]
fn test_env_can_be_disabled() {
    Jail::expect_with(|jail| {
        jail.set_env("CAREDESK_DELAYS__SUBMIT_MS", "3");
        let config = ConfigLoader::new().without_env().load().unwrap();
        assert_eq!(config.delays.submit_ms, 1500);
        Ok(())
    });
}

#[test]
fn test_missing_file_is_skipped_unless_required() {
    Jail::expect_with(|_jail| {
        assert!(ConfigLoader::new().with_file("absent.yaml").load().is_ok());

        let err = ConfigLoader::new()
            .with_file("absent.yaml")
            .require_file()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::SourceNotFound(_)));
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("CAREDESK_DELAYS__SUBMIT_MS", "999999");
        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        jail.set_env("CAREDESK_DELAYS__SUBMIT_MS", "soon");
        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        Ok(())
    });
}
