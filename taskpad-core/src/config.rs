//! Configuration management
//!
//! settings.json in the taskpad directory:
//! ```json
//! {
//!   "app": { "storeFile": "store.json", "logLevel": "info" }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const DEFAULT_STORE_FILE: &str = "store.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    store_file: Option<String>,
    #[serde(default)]
    log_level: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Taskpad configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// File name of the key-value store, relative to the taskpad directory.
    pub store_file: String,
    /// Log level for the file logger; `None` picks the build default.
    pub log_level: Option<String>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: DEFAULT_STORE_FILE.to_string(),
            log_level: None,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the taskpad directory. A missing or malformed
    /// settings file falls back to defaults.
    pub fn load(taskpad_dir: &Path) -> Result<Self> {
        let settings_path = taskpad_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        Ok(Self {
            store_file: raw
                .app
                .store_file
                .clone()
                .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string()),
            log_level: raw.app.log_level.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the taskpad directory.
    /// Preserves settings the app doesn't manage.
    pub fn save(&self, taskpad_dir: &Path) -> Result<()> {
        let settings_path = taskpad_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.store_file = Some(self.store_file.clone());
        settings.app.log_level = self.log_level.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
