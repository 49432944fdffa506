// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves grid and output settings from TOML config files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::grid::GRID_WIDTH;

const CONFIG_DIR: &str = "grafana-gridder";
const CONFIG_FILE: &str = "config.toml";

/// Dimensions used when placing panels on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Total number of columns every row must fill
    pub width: u32,
    /// Row height used when a group does not specify its own
    pub row_height: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            row_height: 8,
        }
    }
}

/// How the generated dashboard document is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Indent the JSON output
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridSettings,
    pub output: OutputSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl Config {
    /// `<config dir>/grafana-gridder/config.toml`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Settings from the default path; a missing or broken file falls back to defaults
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load(&path).unwrap_or_default(),
            None => Self::default(),
        }
    }

    /// Write these settings as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }
}
