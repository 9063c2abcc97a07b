//! Simple test infrastructure
//!
//! Every context owns a temporary directory used as translation directory.

use std::path::Path;
use std::sync::Once;

use alm_plugins::config::I18nConfig;
use alm_plugins::i18n::{BundledTables, TranslatorRegistry};
use alm_plugins::utils::helpers::external_file_name;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Test context with an isolated translation directory
pub struct SimpleTestContext {
    pub config: I18nConfig,
    pub temp_dir: tempfile::TempDir,
}

impl SimpleTestContext {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        let temp_dir = tempfile::tempdir()?;
        let config = I18nConfig {
            translation_dir: temp_dir.path().join("lang"),
            ..I18nConfig::default()
        };

        Ok(Self { config, temp_dir })
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Registry over the bundled tables
    pub fn registry(&self) -> TranslatorRegistry {
        TranslatorRegistry::new(self.config.clone(), BundledTables::builtin())
    }

    /// Registry that only sees external files
    pub fn bare_registry(&self) -> TranslatorRegistry {
        TranslatorRegistry::new(self.config.clone(), BundledTables::empty())
    }

    /// Write an external translation file for a language
    pub fn write_external(&self, language: &str, content: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config.translation_dir)?;
        std::fs::write(self.external_path(language), content)
    }

    pub fn read_external(&self, language: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.external_path(language))
    }

    pub fn external_path(&self, language: &str) -> std::path::PathBuf {
        self.config
            .translation_dir
            .join(external_file_name(&self.config.file_prefix, language))
    }
}
