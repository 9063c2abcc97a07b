//! Registry of constructible forms
//!
//! The host registers a factory per form it can build. Regenerating the
//! translation tables constructs every registered form once so its text is
//! seen by the translator.

use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use crate::utils::errors::{AlmError, Result};
use super::control::Control;

/// Builds a fresh instance of a form
pub type FormFactory = Box<dyn Fn() -> Control + Send + Sync>;

/// Named form factories, in registration order
#[derive(Default)]
pub struct FormRegistry {
    factories: Vec<(String, FormFactory)>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory, replacing any factory with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Control + Send + Sync + 'static,
    {
        let name = name.into();
        let factory: FormFactory = Box::new(factory);
        match self.factories.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = factory,
            None => self.factories.push((name, factory)),
        }
        self
    }

    /// Register a fixed layout that is cloned on every build
    pub fn register_layout(&mut self, name: impl Into<String>, layout: Control) -> &mut Self {
        self.register(name, move || layout.clone())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.iter().map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.iter().any(|(existing, _)| existing == name)
    }

    /// Construct the named form
    pub fn build(&self, name: &str) -> Result<Control> {
        self.factories
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, factory)| factory())
            .ok_or_else(|| AlmError::UnknownForm { name: name.to_string() })
    }

    pub(crate) fn factories(&self) -> impl Iterator<Item = (&str, &FormFactory)> {
        self.factories.iter().map(|(name, factory)| (name.as_str(), factory))
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Register every `*.json` layout found in a directory
    ///
    /// The file stem is used as the form name, e.g. `Main.json` -> `Main`.
    /// Files are registered in file name order.
    pub fn from_layout_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(AlmError::InvalidInput(format!(
                "Layout directory not found: {}",
                dir.display()
            )));
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut registry = Self::new();
        for path in paths {
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| AlmError::InvalidInput(format!("Invalid filename: {}", path.display())))?
                .to_string();
            let layout = load_layout_file(&path)?;
            debug!(form = %name, path = %path.display(), "Layout registered");
            registry.register_layout(name, layout);
        }

        if registry.is_empty() {
            warn!("No layout files found in {}", dir.display());
        }
        Ok(registry)
    }
}

impl fmt::Debug for FormRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormRegistry")
            .field("forms", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// Load a control tree from a JSON layout file
pub fn load_layout_file(path: &Path) -> Result<Control> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_register_and_build() {
        let mut forms = FormRegistry::new();
        forms.register("Main", || Control::new("Main", "Main Window"));
        forms.register_layout("About", Control::new("About", "About"));

        assert_eq!(forms.len(), 2);
        assert!(forms.contains("Main"));
        assert_eq!(forms.names().collect::<Vec<_>>(), vec!["Main", "About"]);
        assert_eq!(forms.build("About").unwrap().text, "About");
        assert_matches!(forms.build("Missing"), Err(AlmError::UnknownForm { name }) if name == "Missing");
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut forms = FormRegistry::new();
        forms.register("Main", || Control::new("Main", "Old"));
        forms.register("Main", || Control::new("Main", "New"));
        assert_eq!(forms.len(), 1);
        assert_eq!(forms.build("Main").unwrap().text, "New");
    }

    #[test]
    fn test_from_layout_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Settings.json"), r#"{ "name": "Settings", "text": "Settings" }"#).unwrap();
        fs::write(dir.path().join("About.json"), r#"{ "name": "About", "text": "About" }"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let forms = FormRegistry::from_layout_dir(dir.path()).unwrap();
        assert_eq!(forms.names().collect::<Vec<_>>(), vec!["About", "Settings"]);
    }

    #[test]
    fn test_from_layout_dir_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Broken.json"), "{ not json").unwrap();
        assert_matches!(FormRegistry::from_layout_dir(dir.path()), Err(AlmError::Serialization(_)));
    }

    #[test]
    fn test_from_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert_matches!(FormRegistry::from_layout_dir(&missing), Err(AlmError::InvalidInput(_)));
    }
}
