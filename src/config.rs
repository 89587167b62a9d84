//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding model JSON files (used by the web API)
    pub workspace: Option<PathBuf>,
}

/// Workbook export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory where generated workbooks go when no output path is given
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Project name recorded in exported workbooks when none is given
    #[serde(default = "default_project_name")]
    pub project_name: String,
}

/// Default export directory (current directory).
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Default project label for exports.
fn default_project_name() -> String {
    "Untitled Project".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            project_name: default_project_name(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Reqbook/config.toml`
/// - macOS: `~/Library/Application Support/Reqbook/config.toml`
/// - Windows: `%APPDATA%\Reqbook\config.toml`
///
/// The directory can be overridden with the `REQBOOK_CONFIG_DIR` environment
/// variable.
///
/// # Validation
///
/// - `workspace` must exist and be a directory (if set)
/// - `project_name` must not be blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `REQBOOK_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `Reqbook`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(workspace) = &self.paths.workspace {
            if !workspace.is_dir() {
                anyhow::bail!(
                    "Workspace directory does not exist: {}",
                    workspace.display()
                );
            }
        }

        if self.export.project_name.trim().is_empty() {
            anyhow::bail!("Export project name cannot be empty");
        }

        Ok(())
    }

    /// Returns the workspace directory, falling back to `<config_dir>/models`.
    pub fn workspace_dir(&self) -> Result<PathBuf> {
        match &self.paths.workspace {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("models")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.workspace, None);
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert_eq!(config.export.project_name, "Untitled Project");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();

        config.paths.workspace = Some(temp_dir.path().join("missing"));
        assert!(config.validate().is_err());

        config.paths.workspace = Some(temp_dir.path().to_path_buf());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_project_name() {
        let mut config = Config::new();
        config.export.project_name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.paths.workspace = Some(temp_dir.path().to_path_buf());
        config.export.project_name = "Atlas CRM".to_string();

        config.save_to(&config_file).unwrap();
        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("none.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[export]\noutput_dir = \"exports\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.export.output_dir, PathBuf::from("exports"));
        assert_eq!(loaded.export.project_name, "Untitled Project");
        assert_eq!(loaded.paths, PathConfig::default());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[export\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }
}
