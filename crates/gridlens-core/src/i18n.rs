//! Translation lookup.
//!
//! Widgets only know stable string keys (`estimation-card.link`, ...). Locale data
//! comes from a flat JSON object of `key -> text`; `{{name}}` placeholders are
//! filled by [`Translator::t_with`].

use std::collections::HashMap;
use std::path::Path;

use crate::error::{GridLensError, Result};

const ENGLISH_BUNDLE: &str = include_str!("../locales/en.json");

/// Key-based translation collaborator.
pub trait Translator {
    /// Raw text for `key`, if the bundle has it.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Text for `key` with `{{name}}` placeholders substituted.
    fn lookup_with(&self, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.lookup(key).map(|text| interpolate(&text, args))
    }

    /// Text for `key`; a missing key renders as the key itself.
    fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.lookup_with(key, args)
            .unwrap_or_else(|| key.to_string())
    }
}

fn interpolate(text: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(text.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{{{name}}}}}"), value)
    })
}

/// In-memory bundle loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct StaticTranslator {
    entries: HashMap<String, String>,
}

impl StaticTranslator {
    /// Built-in English bundle.
    pub fn english() -> Self {
        // The embedded bundle is checked by `english_bundle_parses`.
        Self::from_json(ENGLISH_BUNDLE).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| GridLensError::Translation(format!("invalid bundle: {e}")))?;
        Ok(Self { entries })
    }

    /// Loads a bundle file and layers it over the English defaults.
    pub fn english_with_overrides(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let overrides = Self::from_json(&raw)?;
        let mut merged = Self::english();
        merged.entries.extend(overrides.entries);
        tracing::debug!(path = %path.display(), "Loaded locale overrides");
        Ok(merged)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for StaticTranslator {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_bundle_parses() {
        let parsed = StaticTranslator::from_json(ENGLISH_BUNDLE).unwrap();
        assert!(!parsed.is_empty());
        assert_eq!(parsed.t("legends.carbonintensity"), "Carbon intensity");
    }

    #[test]
    fn missing_key_renders_key() {
        let t = StaticTranslator::default();
        assert_eq!(t.t("does.not.exist"), "does.not.exist");
        assert_eq!(t.lookup("does.not.exist"), None);
    }

    #[test]
    fn placeholders_are_filled() {
        let mut t = StaticTranslator::default();
        t.insert("greeting", "{{count}}% of {{what}}");
        assert_eq!(
            t.t_with("greeting", &[("count", "42"), ("what", "hours")]),
            "42% of hours"
        );
    }

    #[test]
    fn invalid_bundle_is_an_error() {
        let err = StaticTranslator::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, GridLensError::Translation(_)));
    }

    #[test]
    fn overrides_layer_over_english() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fr.json");
        std::fs::write(&path, r#"{"legends.carbonintensity": "Intensité carbone"}"#).unwrap();

        let t = StaticTranslator::english_with_overrides(&path).unwrap();
        assert_eq!(t.t("legends.carbonintensity"), "Intensité carbone");
        assert_eq!(t.t("estimation-card.link"), "Read about our estimation models");
    }
}
