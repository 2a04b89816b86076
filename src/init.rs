//! Configuration initialization for safe-clean
//!
//! Generates a default config file at ~/.config/safe-clean/config.toml

use crate::config::Config;
use anyhow::{anyhow, Context};
use std::fs;
use std::path::Path;

/// Default config template
const CONFIG_TEMPLATE: &str = r#"# safe-clean configuration
# Location: ~/.config/safe-clean/config.toml

# Refuse to delete untracked files unless -f/--force is given.
# Dry runs (-n/--dry-run) are always allowed.
require_force = true

# Log filter used when SAFE_CLEAN_LOG is unset (error, warn, info, debug, trace).
# log_level = "warn"
"#;

/// Outcome of `safe-clean init`
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

/// Run the init subcommand
pub fn run_init() -> anyhow::Result<()> {
    let config_path =
        Config::config_path().ok_or_else(|| anyhow!("Cannot determine config directory"))?;

    match write_template(&config_path)? {
        InitOutcome::Created => {
            println!("Created config file: {}", config_path.display());
            println!();
            println!("Default: require_force = true (use -f to delete, -n to preview).");
        }
        InitOutcome::AlreadyExists => {
            eprintln!("Config file already exists: {}", config_path.display());
            eprintln!("To regenerate, delete the file first and run `safe-clean init` again.");
        }
    }

    Ok(())
}

/// Write the template to `config_path` unless a file is already there
pub fn write_template(config_path: &Path) -> anyhow::Result<InitOutcome> {
    if config_path.exists() {
        return Ok(InitOutcome::AlreadyExists);
    }

    if let Some(config_dir) = config_path.parent() {
        fs::create_dir_all(config_dir)
            .with_context(|| format!("Cannot create directory {}", config_dir.display()))?;
    }

    fs::write(config_path, CONFIG_TEMPLATE).context("Cannot write config file")?;
    tracing::info!(path = %config_path.display(), "config written");

    Ok(InitOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_as_config() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.require_force);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_write_template_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/config.toml");

        assert_eq!(write_template(&path).unwrap(), InitOutcome::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn test_write_template_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "require_force = false\n").unwrap();

        assert_eq!(write_template(&path).unwrap(), InitOutcome::AlreadyExists);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "require_force = false\n"
        );
    }
}
