//! Translator registry and table maintenance
//!
//! This module owns the per-language translation contexts. Contexts are
//! loaded on first use, from the external override file when it is readable
//! and from the bundled table otherwise, and live until [`TranslatorRegistry::clear`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use crate::config::I18nConfig;
use crate::ui::{Control, FormRegistry};
use crate::utils::errors::{AlmError, Result};
use crate::utils::helpers::{external_file_name, internal_resource_name};
use crate::utils::logging;
use super::bundled::BundledTables;
use super::context::TranslationContext;
use super::translator::translate_form;

/// Per-language cache of translation contexts
#[derive(Debug, Clone)]
pub struct TranslatorRegistry {
    /// Loaded contexts by language code
    contexts: HashMap<String, TranslationContext>,
    config: I18nConfig,
    bundled: BundledTables,
}

impl TranslatorRegistry {
    /// Create an empty registry; nothing is loaded until first use
    pub fn new(config: I18nConfig, bundled: BundledTables) -> Self {
        Self {
            contexts: HashMap::new(),
            config,
            bundled,
        }
    }

    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    /// Get the context of a language, loading it on first request
    pub fn get_context(&mut self, language: &str) -> &mut TranslationContext {
        match self.contexts.entry(language.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let context = load_context(&self.config, &self.bundled, language);
                entry.insert(context)
            }
        }
    }

    /// Get an already loaded context
    pub fn cached(&self, language: &str) -> Option<&TranslationContext> {
        self.contexts.get(language)
    }

    pub fn is_loaded(&self, language: &str) -> bool {
        self.contexts.contains_key(language)
    }

    /// Codes of all loaded languages, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.contexts.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Path of the external override file of a language
    pub fn external_path(&self, language: &str) -> PathBuf {
        self.config
            .translation_dir
            .join(external_file_name(&self.config.file_prefix, language))
    }

    /// Pick the language to use for a requested locale
    ///
    /// Region suffixes are dropped (`de-AT` -> `de`); unsupported or missing
    /// locales resolve to the default language.
    pub fn resolve_language(&self, requested: Option<&str>) -> String {
        if let Some(locale) = requested {
            let code = locale.split(['-', '_']).next().unwrap_or(locale);
            if self.config.supported_languages.iter().any(|lang| lang == code) {
                return code.to_string();
            }
        }

        self.config.default_language.clone()
    }

    /// Translate a form into a language, returning the number of changed texts
    pub fn translate_interface(&mut self, form: &mut Control, language: &str) -> usize {
        let updated = translate_form(form, self.get_context(language));
        logging::log_form_translated(&form.name, language, updated);
        updated
    }

    /// Merge a disjoint set of entries into a language's context
    pub fn merge(&mut self, language: &str, other: &TranslationContext) -> Result<()> {
        self.get_context(language).copy_from(other)
    }

    /// Drop a language's context and load it again
    pub fn reload(&mut self, language: &str) -> &mut TranslationContext {
        self.contexts.remove(language);
        self.get_context(language)
    }

    /// Construct every registered form not named in `banlist` and translate it
    ///
    /// With capture mode enabled this records the text of every form.
    /// Returns the number of forms built.
    pub fn load_all_forms<S: AsRef<str>>(&mut self, forms: &FormRegistry, language: &str, banlist: &[S]) -> usize {
        let mut built = 0;
        for (name, factory) in forms.factories() {
            if banlist.iter().any(|banned| banned.as_ref() == name) {
                debug!(form = name, "Skipping banned form");
                continue;
            }

            let mut form = factory();
            self.translate_interface(&mut form, language);
            built += 1;
        }
        built
    }

    /// Write every loaded context to its external file
    ///
    /// Lines containing any of the `banlist` substrings are left out.
    pub fn dump_all<S: AsRef<str>>(&self, banlist: &[S]) -> Result<()> {
        fs::create_dir_all(&self.config.translation_dir)?;

        for language in self.languages() {
            let Some(context) = self.contexts.get(language) else {
                continue;
            };
            let lines: Vec<String> = context
                .write(context.separator())
                .into_iter()
                .filter(|line| !banlist.iter().any(|banned| line.contains(banned.as_ref())))
                .collect();

            let path = self.external_path(language);
            write_lines(&path, &lines)?;
            logging::log_table_written(language, &path, lines.len());
        }
        Ok(())
    }

    /// Remove banned keys from every loaded context and rewrite its file
    ///
    /// Returns the total number of removed keys.
    pub fn prune_all<S: AsRef<str>>(&mut self, banlist: &[S]) -> Result<usize> {
        fs::create_dir_all(&self.config.translation_dir)?;

        let mut languages: Vec<String> = self.contexts.keys().cloned().collect();
        languages.sort_unstable();

        let mut total = 0;
        for language in languages {
            let path = self.external_path(&language);
            let Some(context) = self.contexts.get_mut(&language) else {
                continue;
            };
            let removed = context.remove_banned_entries(banlist);
            logging::log_keys_removed(&language, removed);

            let lines = context.write(context.separator());
            write_lines(&path, &lines)?;
            logging::log_table_written(&language, &path, lines.len());
            total += removed;
        }
        Ok(total)
    }

    /// Strip the default language's keys from every loaded language's file
    ///
    /// Keys starting with one of `keep_prefixes` are preserved. The files are
    /// edited line by line, so entries unknown to the loaded contexts survive.
    /// A missing file fails the whole operation before anything is written.
    /// Returns the total number of removed lines.
    pub fn remove_all<S: AsRef<str>>(&self, default_language: &str, keep_prefixes: &[S]) -> Result<usize> {
        let defaults = self
            .contexts
            .get(default_language)
            .ok_or_else(|| AlmError::LanguageNotLoaded { language: default_language.to_string() })?;

        let separator = defaults.separator();
        let doomed: Vec<String> = defaults
            .lookup()
            .keys()
            .filter(|key| !keep_prefixes.iter().any(|prefix| key.starts_with(prefix.as_ref())))
            .map(|key| format!("{}{}", key, separator))
            .collect();

        // Every file is read before any is rewritten
        let mut tables = Vec::new();
        for language in self.languages() {
            let path = self.external_path(language);
            let content = fs::read_to_string(&path)?;
            tables.push((language, path, content));
        }

        let mut total = 0;
        for (language, path, content) in &tables {
            let kept: Vec<&str> = content
                .lines()
                .filter(|line| !doomed.iter().any(|prefix| line.starts_with(prefix.as_str())))
                .collect();

            let removed = content.lines().count() - kept.len();
            write_lines(path, &kept)?;
            logging::log_keys_removed(language, removed);
            total += removed;
        }
        Ok(total)
    }

    /// Key counts of every loaded language
    pub fn stats(&self) -> TranslationStats {
        let mut stats = TranslationStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for language in self.languages() {
            let key_count = self.contexts.get(language).map_or(0, TranslationContext::len);
            stats.languages.push(LanguageStats {
                code: language.to_string(),
                key_count,
            });
            if language == self.config.default_language {
                stats.total_keys = key_count;
            }
        }

        stats
    }

    /// Drop every loaded context
    pub fn clear(&mut self) {
        self.contexts.clear();
    }
}

/// Translation statistics
#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    /// Key count of the default language
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

fn load_context(config: &I18nConfig, bundled: &BundledTables, language: &str) -> TranslationContext {
    let path = config
        .translation_dir
        .join(external_file_name(&config.file_prefix, language));

    let mut external = None;
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => external = Some(content),
            Err(e) => logging::log_external_unreadable(language, &path, &e),
        }
    }

    let resource = internal_resource_name(&config.file_prefix, language);
    let (content, source) = match external.as_deref() {
        Some(content) => (content, "external"),
        None => match bundled.get(&resource) {
            Some(content) => (content, "bundled"),
            None => ("", "empty"),
        },
    };

    let mut context = TranslationContext::with_separator(content, config.separator);
    context.set_capture_new(config.capture_new_keys);
    logging::log_context_loaded(language, source, context.len());
    context
}

fn write_lines<S: AsRef<str>>(path: &std::path::Path, lines: &[S]) -> Result<()> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}
