//! Internationalization module
//!
//! This module handles translation of the plugin's forms. It provides the
//! per-language translation tables, their loading and caching, the code that
//! applies a table to a control tree, and the table maintenance utilities.

pub mod bundled;
pub mod context;
pub mod registry;
pub mod translator;

// Re-export commonly used i18n components
pub use bundled::BundledTables;
pub use context::{TranslationContext, SEPARATOR};
pub use registry::{TranslatorRegistry, TranslationStats, LanguageStats};
pub use translator::translate_form;
