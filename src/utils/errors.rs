//! Error handling for the plugin crate
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for plugin operations
#[derive(Error, Debug)]
pub enum AlmError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Duplicate translation key: {key}")]
    DuplicateKey { key: String },

    #[error("Language not loaded: {language}")]
    LanguageNotLoaded { language: String },

    #[error("Unknown form: {name}")]
    UnknownForm { name: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Plugin error: {0}")]
    Plugin(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, AlmError>;

impl AlmError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AlmError::Config(_) => false,
            AlmError::ConfigLoad(_) => false,
            AlmError::DuplicateKey { .. } => false,
            AlmError::LanguageNotLoaded { .. } => true,
            AlmError::UnknownForm { .. } => true,
            AlmError::Serialization(_) => false,
            AlmError::Io(_) => true,
            AlmError::Plugin(_) => true,
            AlmError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AlmError::Config(_) => ErrorSeverity::Critical,
            AlmError::ConfigLoad(_) => ErrorSeverity::Critical,
            AlmError::DuplicateKey { .. } => ErrorSeverity::Critical,
            AlmError::LanguageNotLoaded { .. } => ErrorSeverity::Warning,
            AlmError::UnknownForm { .. } => ErrorSeverity::Warning,
            AlmError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
