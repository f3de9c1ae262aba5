//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Schema file used when none is given on the command line
    pub schema_path: Option<String>,
    /// Show the submission time under the submitted data (default: shown)
    pub show_submitted_at: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "dynform", "dynform-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a given file; a missing file yields the defaults
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pick the schema file: command line first, then config
    pub fn schema_source(&self, cli_arg: Option<String>) -> Option<PathBuf> {
        cli_arg
            .or_else(|| self.schema_path.clone())
            .map(PathBuf::from)
    }

    pub fn show_submitted_at(&self) -> bool {
        self.show_submitted_at.unwrap_or(true)
    }
}
