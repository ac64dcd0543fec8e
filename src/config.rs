//! Optional TOML configuration naming the holiday file.
//!
//! Callers that do not want to hard-code a holiday file path can load a
//! `DateMathConfig` from disk and build the utility from it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DateMathError, DateMathResult};

/// Configuration at ~/.config/datemath/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DateMathConfig {
    /// Path to the flat holiday file. `~` is expanded on access.
    pub holiday_file: PathBuf,
}

impl DateMathConfig {
    pub fn config_path() -> DateMathResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DateMathError::Config("Could not determine config directory".into()))?
            .join("datemath");

        Ok(config_dir.join("config.toml"))
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> DateMathResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DateMathError::Config(e.to_string()))
    }

    /// Save the current config.
    pub fn save(&self, path: &Path) -> DateMathResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DateMathError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DateMathError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| DateMathError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The holiday file path with `~` expanded.
    pub fn holiday_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.holiday_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }
}
