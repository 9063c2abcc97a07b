//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the translation layer and plugin commands.

use std::path::Path;
use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{AlmError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for
/// as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AlmError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "almlang.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(fmt::layer().with_ansi(false).with_writer(non_blocking)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .with(filter)
        .try_init()
        .map_err(|e| AlmError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log where a translation table was loaded from
pub fn log_context_loaded(language: &str, source: &str, key_count: usize) {
    info!(
        language = language,
        source = source,
        key_count = key_count,
        "Translation context loaded"
    );
}

/// Log an external table that could not be read
pub fn log_external_unreadable(language: &str, path: &Path, error: &std::io::Error) {
    warn!(
        language = language,
        path = %path.display(),
        error = %error,
        "External translation file unreadable, using bundled table"
    );
}

/// Log the result of translating a form
pub fn log_form_translated(form: &str, language: &str, updated: usize) {
    debug!(
        form = form,
        language = language,
        updated = updated,
        "Form translated"
    );
}

/// Log a table written to disk
pub fn log_table_written(language: &str, path: &Path, lines: usize) {
    info!(
        language = language,
        path = %path.display(),
        lines = lines,
        "Translation table written"
    );
}

/// Log keys purged from a table
pub fn log_keys_removed(language: &str, removed: usize) {
    if removed > 0 {
        info!(language = language, removed = removed, "Translation keys removed");
    } else {
        debug!(language = language, "No translation keys removed");
    }
}

/// Log plugin actions with structured data
pub fn log_plugin_action(plugin: &str, action: &str, details: Option<&str>) {
    info!(
        plugin = plugin,
        action = action,
        details = details,
        "Plugin action performed"
    );
}
