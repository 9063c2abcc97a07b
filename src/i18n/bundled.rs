//! Translation tables compiled into the crate
//!
//! These are used whenever no external override file can be read.

use std::collections::HashMap;

/// Bundled translation tables keyed by resource name (`almlang_en`, ...)
#[derive(Debug, Clone)]
pub struct BundledTables {
    tables: HashMap<String, &'static str>,
}

impl BundledTables {
    /// A set without any table
    pub fn empty() -> Self {
        Self { tables: HashMap::new() }
    }

    /// The tables shipped in `translations/`
    pub fn builtin() -> Self {
        Self::empty()
            .with_table("almlang_en", include_str!("../../translations/almlang_en.txt"))
            .with_table("almlang_de", include_str!("../../translations/almlang_de.txt"))
            .with_table("almlang_fr", include_str!("../../translations/almlang_fr.txt"))
    }

    pub fn with_table(mut self, name: impl Into<String>, content: &'static str) -> Self {
        self.tables.insert(name.into(), content);
        self
    }

    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.tables.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for BundledTables {
    fn default() -> Self {
        Self::builtin()
    }
}
