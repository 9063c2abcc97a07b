//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    pub maintenance: MaintenanceConfig,
    pub features: FeaturesConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    /// Key/value boundary used in translation files
    #[serde(deserialize_with = "deserialize_separator")]
    pub separator: char,
    /// Directory holding the external `{prefix}_{lang}.txt` override files
    pub translation_dir: PathBuf,
    pub file_prefix: String,
    /// Record untranslated text as new entries on lookup misses
    pub capture_new_keys: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

/// Settings for the table maintenance utilities
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MaintenanceConfig {
    /// Substrings filtered out of dumped lines
    #[serde(default)]
    pub dump_ban_list: Vec<String>,
    /// Form names skipped while regenerating
    #[serde(default)]
    pub form_ban_list: Vec<String>,
    /// Key prefixes kept when removing default-language keys
    #[serde(default)]
    pub keep_prefixes: Vec<String>,
    /// Directory with JSON form layouts
    pub layout_dir: PathBuf,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    pub living_dex: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_sources("config")
    }

    /// Load settings from a named configuration file and environment variables
    ///
    /// Values missing from both sources keep their [`Default`] value.
    pub fn from_sources(file: &str) -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;
        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("ALM")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_languages")
                    .with_list_parse_key("maintenance.dump_ban_list")
                    .with_list_parse_key("maintenance.form_ban_list")
                    .with_list_parse_key("maintenance.keep_prefixes")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AlmError> {
        super::validation::validate_settings(self)
    }

    /// Render the settings as a TOML document
    pub fn to_toml(&self) -> Result<String, crate::utils::errors::AlmError> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::utils::errors::AlmError::Config(e.to_string()))
    }
}

/// Accept the separator as text or as a number parsed from the environment
///
/// `ALM__I18N__SEPARATOR=1` arrives as an integer once env values are parsed.
fn deserialize_separator<'de, D>(deserializer: D) -> Result<char, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSeparator {
        Text(String),
        Number(i64),
    }

    let text = match RawSeparator::deserialize(deserializer)? {
        RawSeparator::Text(text) => text,
        RawSeparator::Number(number) => number.to_string(),
    };

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(serde::de::Error::custom(format!(
            "separator must be a single character, got '{}'",
            text
        ))),
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            supported_languages: vec![
                "en".to_string(),
                "de".to_string(),
                "fr".to_string(),
            ],
            separator: '=',
            translation_dir: PathBuf::from("."),
            file_prefix: "almlang".to_string(),
            capture_new_keys: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
            maintenance: MaintenanceConfig {
                dump_ban_list: vec![],
                form_ban_list: vec![],
                keep_prefixes: vec![],
                layout_dir: PathBuf::from("layouts"),
            },
            features: FeaturesConfig { living_dex: true },
        }
    }
}
