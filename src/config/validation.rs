//! Configuration validation
//!
//! Rejects settings that would produce unreadable translation files or
//! make the maintenance commands match everything.

use crate::utils::errors::{AlmError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;
    validate_maintenance_config(&settings.maintenance)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.trim().is_empty() {
        return Err(AlmError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(AlmError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(AlmError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    // Scope keys are joined with '.', so it can never split a record.
    if config.separator == '.' || config.separator == '\n' || config.separator == '\r' {
        return Err(AlmError::Config(
            format!("Invalid translation separator: {:?}", config.separator)
        ));
    }

    if config.file_prefix.trim().is_empty() {
        return Err(AlmError::Config(
            "Translation file prefix is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AlmError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AlmError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if let Some(path) = &config.file_path {
        if path.trim().is_empty() {
            return Err(AlmError::Config(
                "Log file path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate maintenance configuration
fn validate_maintenance_config(config: &super::MaintenanceConfig) -> Result<()> {
    if config.dump_ban_list.iter().any(|entry| entry.is_empty()) {
        return Err(AlmError::Config(
            "Dump ban list entries must not be empty".to_string()
        ));
    }

    if config.keep_prefixes.iter().any(|entry| entry.is_empty()) {
        return Err(AlmError::Config(
            "Keep prefixes must not be empty".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_default_language_must_be_supported() {
        let mut settings = Settings::default();
        settings.i18n.default_language = "ja".to_string();
        assert_matches!(validate_settings(&settings), Err(AlmError::Config(_)));
    }

    #[test]
    fn test_period_separator_rejected() {
        let mut settings = Settings::default();
        settings.i18n.separator = '.';
        assert_matches!(validate_settings(&settings), Err(AlmError::Config(_)));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(AlmError::Config(msg)) if msg.contains("verbose"));
    }

    #[test]
    fn test_empty_ban_entry_rejected() {
        // An empty substring would match every line.
        let mut settings = Settings::default();
        settings.maintenance.dump_ban_list = vec![String::new()];
        assert!(validate_settings(&settings).is_err());
    }
}
