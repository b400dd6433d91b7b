//! Configuration handling for the calculator

use crate::format::DEFAULT_THOUSANDS_SEPARATOR;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the calculator
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalcConfig {
    /// Separator placed between digit groups in the result panel
    pub thousands_separator: Option<String>,
    /// Show example values in empty, unfocused fields
    pub show_placeholders: Option<bool>,
}

impl CalcConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "pack-calc", "pack-calc")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: CalcConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn thousands_separator(&self) -> &str {
        self.thousands_separator
            .as_deref()
            .unwrap_or(DEFAULT_THOUSANDS_SEPARATOR)
    }

    pub fn show_placeholders(&self) -> bool {
        self.show_placeholders.unwrap_or(true)
    }
}
