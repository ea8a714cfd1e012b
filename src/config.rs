//! Tool configuration
//!
//! Stores user preferences in `~/.config/csvtool/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::download::DEFAULT_FILE_NAME;

/// Configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Download name when no file was uploaded and none is given
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
    /// Directory downloads are written to (current directory if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Show row indices next to the table
    #[serde(default = "default_true")]
    pub show_row_numbers: bool,
    /// Widest a rendered column gets before truncation
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_column_width() -> usize {
    40
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_file_name: default_file_name(),
            output_dir: None,
            show_row_numbers: default_true(),
            max_column_width: default_max_column_width(),
        }
    }
}

impl ToolConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
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

    /// Directory downloads go to
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
