//! Auto-Legality Mod plugin support
//!
//! Menu commands for a save-file editor host and the runtime translation
//! layer for the plugin's own forms. The host's controls are modelled as a
//! plain tree; translation tables are flat `scope.control=text` files.

pub mod config;
pub mod i18n;
pub mod plugins;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AlmError, Result};

// Re-export main components for easy access
pub use i18n::{TranslationContext, TranslatorRegistry};
pub use plugins::{LivingDex, Plugin};
pub use ui::{Control, FormRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
