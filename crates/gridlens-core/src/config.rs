//! Application configuration.
//!
//! Loaded from a JSON file; every field has a default so a partial or missing
//! file still yields a usable config.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GridLensError, Result};
use crate::estimation::message::{DEFAULT_ISSUE_BASE_URL, OUTAGE_MESSAGE_MAX_LEN};
use crate::estimation::FEEDBACK_FLAG;
use crate::flags::StaticFlags;

pub const DEFAULT_FEEDBACK_ENDPOINT: &str = "https://hooks.zapier.com/hooks/catch/14671709/3l9daod/";
pub const DEFAULT_METHODOLOGY_URL: &str = "https://www.electricitymaps.com/methodology#missing-data";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub feature_flags: BTreeMap<String, bool>,
    pub feedback_endpoint: String,
    pub issue_base_url: String,
    pub methodology_url: String,
    pub outage_message_max_len: usize,
    /// Card toggles before the feedback survey may appear
    pub feedback_threshold: u32,
    /// Optional locale bundle layered over the built-in English text
    pub locale_file: Option<PathBuf>,
    /// Window width (logical px) below which the panel uses the mobile layout
    pub mobile_breakpoint: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feature_flags: BTreeMap::from([(FEEDBACK_FLAG.to_string(), true)]),
            feedback_endpoint: DEFAULT_FEEDBACK_ENDPOINT.to_string(),
            issue_base_url: DEFAULT_ISSUE_BASE_URL.to_string(),
            methodology_url: DEFAULT_METHODOLOGY_URL.to_string(),
            outage_message_max_len: OUTAGE_MESSAGE_MAX_LEN,
            feedback_threshold: 3,
            locale_file: None,
            mobile_breakpoint: 768,
        }
    }
}

impl AppConfig {
    /// Default location: `<config dir>/gridlens/config.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridlens")
            .join("config.json")
    }

    /// Reads a config file; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.outage_message_max_len == 0 {
            return Err(GridLensError::Config(
                "outage_message_max_len must be positive".to_string(),
            ));
        }
        if self.mobile_breakpoint == 0 {
            return Err(GridLensError::Config(
                "mobile_breakpoint must be positive".to_string(),
            ));
        }
        if !self.feedback_endpoint.starts_with("http://")
            && !self.feedback_endpoint.starts_with("https://")
        {
            return Err(GridLensError::Config(format!(
                "feedback_endpoint is not an http(s) url: {}",
                self.feedback_endpoint
            )));
        }
        Ok(())
    }

    /// Whether a window of `width` logical pixels gets the mobile layout.
    pub fn is_mobile_width(&self, width: f64) -> bool {
        width < f64::from(self.mobile_breakpoint)
    }

    pub fn flags(&self) -> StaticFlags {
        self.feature_flags
            .iter()
            .map(|(name, enabled)| (name.clone(), *enabled))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::FeatureFlags;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.flags().is_enabled(FEEDBACK_FLAG));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"feedback_threshold": 1, "feature_flags": {"feedback-estimation-labels": false}}"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.feedback_threshold, 1);
        assert_eq!(config.outage_message_max_len, 300);
        assert!(!config.flags().is_enabled(FEEDBACK_FLAG));
    }

    #[test]
    fn mobile_layout_below_breakpoint() {
        let config = AppConfig::default();
        assert!(config.is_mobile_width(520.0));
        assert!(config.is_mobile_width(767.5));
        assert!(!config.is_mobile_width(768.0));
        assert!(!config.is_mobile_width(1280.0));

        let wide = AppConfig {
            mobile_breakpoint: 400,
            ..AppConfig::default()
        };
        assert!(!wide.is_mobile_width(520.0));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"outage_message_max_len": 0}"#).unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(GridLensError::Config(_))
        ));

        std::fs::write(&path, r#"{"feedback_endpoint": "ftp://x"}"#).unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(GridLensError::Config(_))
        ));

        std::fs::write(&path, r#"{"mobile_breakpoint": 0}"#).unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(GridLensError::Config(_))
        ));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(GridLensError::Json(_))));
    }
}
