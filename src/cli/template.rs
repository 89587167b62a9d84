//! Template command for generating blank workbooks.

use crate::catalog::create_default;
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::Domain;
use crate::services::ModelFileService;
use crate::workbook::SpreadsheetCodec;
use clap::Args;
use std::path::PathBuf;

/// Write a blank workbook template for a domain
#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    /// Feature domain (business-rules, actions, animations, design-guidelines)
    #[arg(short, long, value_name = "DOMAIN")]
    pub domain: Domain,

    /// Output path (defaults to [project]_[domain]_[date].xlsx in the export directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Project name recorded in the workbook
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,
}

impl TemplateArgs {
    /// Execute the template command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let project = self
            .project
            .clone()
            .unwrap_or_else(|| config.export.project_name.clone());

        let model = create_default(self.domain);
        let bytes = SpreadsheetCodec::new(self.domain)
            .encode_template(&model, &project)
            .map_err(|e| CliError::io(format!("Failed to generate template: {e}")))?;

        let output_path = self.output.clone().unwrap_or_else(|| {
            config
                .export
                .output_dir
                .join(ModelFileService::default_workbook_name(&project, self.domain))
        });

        ModelFileService::write_workbook(&bytes, &output_path)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("✓ Wrote {} template to: {}", self.domain.label(), output_path.display());
        Ok(())
    }
}
