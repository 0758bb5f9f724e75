//! Settings and configuration utilities.
//!
//! Reads optional defaults from `$HOME/.taiga-lint/settings.json`. Nothing
//! here reaches the validators; settings only shape how the CLI renders.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::data::OutputFormat;

/// Environment variable selecting the default output format.
pub const FORMAT_ENV_VAR: &str = "TAIGA_LINT_FORMAT";

/// Settings loaded from `$HOME/.taiga-lint/settings.json`.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Default output format (`text`, `json` or `yaml`).
    #[serde(default)]
    pub format: Option<String>,
    /// Environment variable fallbacks.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path. A missing file yields defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".taiga-lint").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| self.env.get(key).cloned())
    }

    /// Resolves the output format: flag, then environment, then settings file.
    pub fn output_format(&self, flag: Option<&str>) -> Result<OutputFormat> {
        resolve_format(
            flag,
            self.get_env_var(FORMAT_ENV_VAR).as_deref(),
            self.format.as_deref(),
        )
    }
}

/// Picks the first format source that is set and parses it.
fn resolve_format(
    flag: Option<&str>,
    env_value: Option<&str>,
    configured: Option<&str>,
) -> Result<OutputFormat> {
    let Some(name) = flag.or(env_value).or(configured) else {
        return Ok(OutputFormat::default());
    };

    name.parse::<OutputFormat>()
        .with_context(|| format!("Invalid output format '{name}'"))
}
