//! Export command for writing a model as a workbook.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::{ConfigModel, Domain};
use crate::services::ModelFileService;
use crate::workbook::{ExportError, SpreadsheetCodec};
use clap::Args;
use std::path::PathBuf;

/// Export a configuration model (JSON) to a workbook
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Feature domain of the model
    #[arg(short, long, value_name = "DOMAIN")]
    pub domain: Domain,

    /// Path to the model JSON file
    #[arg(short, long, value_name = "FILE")]
    pub model: PathBuf,

    /// Output path (defaults to [project]_[domain]_[date].xlsx in the export directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Project name recorded in the workbook
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let model = ModelFileService::load_model(&self.model)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if model.domain != self.domain {
            return Err(CliError::validation(format!(
                "Model {} is a {} model, not {}",
                self.model.display(),
                model.domain,
                self.domain
            )));
        }

        let config = Config::load().unwrap_or_default();
        let project = self
            .project
            .clone()
            .unwrap_or_else(|| config.export.project_name.clone());

        let bytes = SpreadsheetCodec::new(model.domain)
            .encode(&model, &project)
            .map_err(|e| match e {
                ExportError::DuplicateSheet { .. } => CliError::validation(e.to_string()),
                ExportError::Xlsx(_) => CliError::io(e.to_string()),
            })?;

        let output_path = self.get_output_path(&config, &model, &project);
        ModelFileService::write_workbook(&bytes, &output_path)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!(
            "✓ Exported {} ({} selected) to: {}",
            model.domain.label(),
            model.selection.len(),
            output_path.display()
        );
        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, config: &Config, model: &ConfigModel, project: &str) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        config
            .export
            .output_dir
            .join(ModelFileService::default_workbook_name(project, model.domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::create_default;

    #[test]
    fn test_get_output_path_default() {
        let args = ExportArgs {
            domain: Domain::DesignGuidelines,
            model: PathBuf::from("model.json"),
            output: None,
            project: None,
        };

        let mut config = Config::default();
        config.export.output_dir = PathBuf::from("/tmp/exports");
        let model = create_default(Domain::DesignGuidelines);
        let path = args.get_output_path(&config, &model, "My Project");

        let path_str = path.to_string_lossy();
        assert!(path_str.starts_with("/tmp/exports"));
        assert!(path_str.contains("my_project_design-guidelines_"));
        assert!(path_str.ends_with(".xlsx"));
    }

    #[test]
    fn test_get_output_path_custom() {
        let custom_path = PathBuf::from("/tmp/my_export.xlsx");
        let args = ExportArgs {
            domain: Domain::DesignGuidelines,
            model: PathBuf::from("model.json"),
            output: Some(custom_path.clone()),
            project: None,
        };

        let model = create_default(Domain::DesignGuidelines);
        let path = args.get_output_path(&Config::default(), &model, "Test");

        assert_eq!(path, custom_path);
    }
}
