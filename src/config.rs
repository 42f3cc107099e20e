//! Application configuration
//!
//! Settings live in a single JSON file at
//! `<config_dir>/portfolio-tui/config.json`. The `theme` field is the
//! durable record of the user's theme selection; loading never fails the
//! application (a missing or corrupt file yields defaults), while saving
//! reports errors so callers can decide whether they care.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Default email recipient for contact-form submissions.
pub const DEFAULT_RECIPIENT: &str = "hv7958045@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Id of the selected theme. Stale ids resolve to the default theme
    /// at hydration time.
    pub theme: String,
    /// Where contact-form submissions are delivered.
    pub recipient_email: String,
    /// Display name used in outgoing mail.
    pub sender_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: crate::theme::default_theme().id.to_string(),
            recipient_email: DEFAULT_RECIPIENT.to_string(),
            sender_name: "Portfolio Contact Form".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file under the platform config directory, or
    /// `None` when the platform has no config directory at all.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portfolio-tui").join("config.json"))
    }

    /// Load from `path`, falling back to defaults if the file is missing
    /// or unparseable. Corrupt files are logged, never fatal.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring corrupt config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write the config as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("writing config to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, "modern");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            theme: "ocean".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme": "forest", "future_setting": 42}"#).unwrap();
        assert_eq!(Config::load_from(&path).theme, "forest");
    }
}
