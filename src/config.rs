//! Configuration for safe-clean
//!
//! Loads user configuration from `~/.config/safe-clean/config.toml`.

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration structure
///
/// Example config.toml:
/// ```toml
/// # Refuse to delete anything unless -f or -n is given.
/// require_force = true
///
/// # Log filter used when SAFE_CLEAN_LOG is unset.
/// log_level = "info"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// If true, a real clean needs `-f/--force`; `-n/--dry-run` is always allowed.
    /// Default: true
    #[serde(default = "default_true")]
    pub require_force: bool,

    /// tracing filter directive (e.g. "info", "safe_clean=debug")
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            require_force: true,
            log_level: None,
        }
    }
}

impl Config {
    /// Get the config file path: ~/.config/safe-clean/config.toml
    ///
    /// If SAFE_CLEAN_CONFIG environment variable is set, uses that path instead.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SAFE_CLEAN_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|d| d.join(".config").join("safe-clean").join("config.toml"))
    }

    /// Load configuration from default path, reporting problems as errors
    pub fn try_load() -> anyhow::Result<Self> {
        Self::try_load_from_path(Self::config_path())
    }

    /// Load configuration from a specific path
    ///
    /// A missing path or file yields the defaults.
    pub fn try_load_from_path(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read config ({})", path.display()))?;
        let config = toml::from_str::<Config>(&content)
            .with_context(|| format!("config parse error ({})", path.display()))?;
        Ok(config)
    }
}
