//! Viewer configuration
//!
//! Defaults live in `~/.config/tabless/config.yaml`. The file is only ever
//! read; command-line flags override whatever it sets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::table::DEFAULT_DELIMITER;

/// Viewer defaults loaded from disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Column delimiter
    pub delimiter: String,
    /// Draw box borders between cells
    pub borders: bool,
    /// Header rows that never scroll
    pub fixed_rows: usize,
    /// Header columns that never scroll
    pub fixed_cols: usize,
    /// Extra screens of rows to read beyond the viewport
    pub read_ahead_pages: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            borders: true,
            fixed_rows: 1,
            fixed_cols: 0,
            read_ahead_pages: 1,
        }
    }
}

impl ViewerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
