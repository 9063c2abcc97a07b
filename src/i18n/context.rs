//! Translation context: the key/value table for one language
//!
//! A context is parsed from `key<SEP>value` lines. Loading is conservative
//! (the first occurrence of a key wins) while [`TranslationContext::update_from`]
//! is authoritative for keys that already exist.

use std::collections::HashMap;
use crate::utils::errors::{AlmError, Result};
use crate::utils::helpers::split_record;

/// Default key/value boundary of translation records
pub const SEPARATOR: char = '=';

/// Translation table for a single language
#[derive(Debug, Clone)]
pub struct TranslationContext {
    /// Translated text by scope key
    translation: HashMap<String, String>,
    /// Whether lookup misses with a fallback are recorded
    capture_new: bool,
    separator: char,
}

impl TranslationContext {
    /// Parse a context using the default separator
    pub fn new(content: &str) -> Self {
        Self::with_separator(content, SEPARATOR)
    }

    /// Parse a context using a custom separator
    pub fn with_separator(content: &str, separator: char) -> Self {
        let mut context = Self {
            translation: HashMap::new(),
            capture_new: false,
            separator,
        };
        for line in content.lines() {
            context.load_line(line);
        }
        context
    }

    fn load_line(&mut self, line: &str) {
        let Some((key, value)) = split_record(line, self.separator) else {
            return;
        };
        self.translation
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    /// Look up the translation of `key`
    ///
    /// Falls back to `fallback` on a miss. In capture mode the fallback is
    /// stored under `key` first; a `None` fallback is never stored.
    pub fn get_translated_text<'a>(&'a mut self, key: &str, fallback: Option<&'a str>) -> Option<&'a str> {
        if self.translation.contains_key(key) {
            return self.translation.get(key).map(String::as_str);
        }

        if let Some(text) = fallback {
            if self.capture_new {
                self.translation.insert(key.to_string(), text.to_string());
            }
        }
        fallback
    }

    /// Overwrite the values of existing keys from `content`
    ///
    /// Keys unknown to this context are ignored.
    pub fn update_from(&mut self, content: &str) {
        for line in content.lines() {
            let Some((key, value)) = split_record(line, self.separator) else {
                continue;
            };
            if let Some(existing) = self.translation.get_mut(key) {
                *existing = value.to_string();
            }
        }
    }

    /// Remove every key matched by a ban pattern
    ///
    /// A pattern ending with the separator matches keys ending with the rest of
    /// the pattern; any other pattern matches keys containing it.
    /// Returns the number of removed keys.
    pub fn remove_banned_entries<S: AsRef<str>>(&mut self, banlist: &[S]) -> usize {
        let bad_keys: Vec<String> = self
            .translation
            .keys()
            .filter(|key| self.is_banned(key, banlist))
            .cloned()
            .collect();

        for key in &bad_keys {
            self.translation.remove(key);
        }
        bad_keys.len()
    }

    fn is_banned<S: AsRef<str>>(&self, key: &str, banlist: &[S]) -> bool {
        banlist.iter().any(|pattern| {
            let pattern = pattern.as_ref();
            match pattern.strip_suffix(self.separator) {
                Some(suffix) => key.ends_with(suffix),
                None => key.contains(pattern),
            }
        })
    }

    /// Insert every entry of `other`
    ///
    /// Fails without modifying `self` if any key already exists.
    pub fn copy_from(&mut self, other: &TranslationContext) -> Result<()> {
        if let Some(key) = other.translation.keys().find(|key| self.translation.contains_key(*key)) {
            return Err(AlmError::DuplicateKey { key: key.clone() });
        }

        self.translation.extend(
            other
                .translation
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        Ok(())
    }

    /// Serialize the table as `key<SEP>value` lines
    ///
    /// Keys without a period sort ahead of dotted keys; each group is ordered
    /// by the full line.
    pub fn write(&self, separator: char) -> Vec<String> {
        let mut lines: Vec<(bool, String)> = self
            .translation
            .iter()
            .map(|(key, value)| (key.contains('.'), format!("{}{}{}", key, separator, value)))
            .collect();
        lines.sort();
        lines.into_iter().map(|(_, line)| line).collect()
    }

    /// Read-only view of the table
    pub fn lookup(&self) -> &HashMap<String, String> {
        &self.translation
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.translation.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.translation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translation.is_empty()
    }

    pub fn clear(&mut self) {
        self.translation.clear();
    }

    pub fn capture_new(&self) -> bool {
        self.capture_new
    }

    pub fn set_capture_new(&mut self, capture_new: bool) {
        self.capture_new = capture_new;
    }

    pub fn separator(&self) -> char {
        self.separator
    }
}

impl Default for TranslationContext {
    fn default() -> Self {
        Self::new("")
    }
}
