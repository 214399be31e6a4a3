//! User configuration management
//!
//! Handles saving and loading user preferences including language settings
//! and the announcement length limit.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::theme::ThemeConfig;

/// User configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Preferred language code (e.g., "en", "de")
    pub language: String,
    /// Maximum announcement length in characters.
    ///
    /// The console panel reads this once at construction; changing it while
    /// a panel is open does not retroactively change that panel's limit.
    #[serde(default = "default_max_announcement_length")]
    pub max_announcement_length: usize,
    /// UI theme settings
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Window width in pixels
    #[serde(default)]
    pub window_width: Option<u32>,
    /// Window height in pixels
    #[serde(default)]
    pub window_height: Option<u32>,
}

fn default_max_announcement_length() -> usize {
    256
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_announcement_length: default_max_announcement_length(),
            theme: ThemeConfig::default(),
            window_width: None,
            window_height: None,
        }
    }
}

impl UserConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("CommsDeck");
            p.push("config.json");
            p
        })
    }

    /// Load configuration from disk, defaulting on any error.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                if path.exists() {
                    fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}
