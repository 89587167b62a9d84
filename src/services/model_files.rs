//! Model and workbook file I/O service.
//!
//! This module centralizes file operations for configuration models (JSON)
//! and exported workbooks, providing consistent error messages and atomic
//! writes.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::WORKBOOK_EXTENSION;
use crate::models::{ConfigModel, Domain};

/// Service for configuration model and workbook file I/O.
pub struct ModelFileService;

impl ModelFileService {
    /// Loads a configuration model from a JSON file.
    ///
    /// The model is validated after parsing.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use reqbook::services::ModelFileService;
    ///
    /// let model = ModelFileService::load_model(Path::new("actions.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load_model(path: &Path) -> Result<ConfigModel> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model file {}", path.display()))?;
        let model: ConfigModel = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse model file {}", path.display()))?;
        model
            .validate()
            .with_context(|| format!("Invalid model in {}", path.display()))?;
        Ok(model)
    }

    /// Saves a configuration model as pretty-printed JSON.
    ///
    /// Uses temp file + rename so the target is never left half-written.
    pub fn save_model(model: &ConfigModel, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(model).context("Failed to serialize model to JSON")?;
        write_atomic(path, content.as_bytes())
            .with_context(|| format!("Failed to save model to {}", path.display()))
    }

    /// Reads workbook bytes from disk.
    pub fn read_workbook(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read workbook {}", path.display()))
    }

    /// Writes workbook bytes to disk atomically.
    pub fn write_workbook(bytes: &[u8], path: &Path) -> Result<()> {
        write_atomic(path, bytes)
            .with_context(|| format!("Failed to write workbook to {}", path.display()))
    }

    /// Default workbook file name: `<project>_<domain>_<YYYY-MM-DD>.xlsx`.
    pub fn default_workbook_name(project: &str, domain: Domain) -> PathBuf {
        let date = chrono::Local::now().format("%Y-%m-%d");
        PathBuf::from(format!(
            "{}_{}_{}.{}",
            sanitize_filename(project),
            domain.slug(),
            date,
            WORKBOOK_EXTENSION
        ))
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to {}", path.display()))?;
    Ok(())
}

/// Sanitizes a project name for use in a filename.
///
/// Replaces problematic characters with underscores and converts to lowercase.
///
/// # Examples
///
/// ```
/// # use reqbook::services::model_files::sanitize_filename;
/// assert_eq!(sanitize_filename("My Project"), "my_project");
/// assert_eq!(sanitize_filename("CRM/Phase:2"), "crm_phase_2");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.trim()
        .replace(['/', '\\', ':', ' ', '*', '?', '"', '<', '>', '|'], "_")
        .to_lowercase()
}
