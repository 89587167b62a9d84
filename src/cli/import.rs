//! Import command for reading a workbook back into a model.

use crate::catalog::create_default;
use crate::cli::common::{CliError, CliResult};
use crate::models::Domain;
use crate::services::{ImportService, LogNotifier, ModelFileService};
use clap::Args;
use std::path::PathBuf;

/// Import a workbook and reconcile it against the default catalog
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Feature domain the workbook was exported from
    #[arg(short, long, value_name = "DOMAIN")]
    pub domain: Domain,

    /// Path to the workbook (.xlsx)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Write the merged model JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the merged model as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> CliResult<()> {
        let bytes = ModelFileService::read_workbook(&self.input)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let notifier = LogNotifier;
        let live = create_default(self.domain);
        let merged = ImportService::new(&notifier)
            .import(&live, &bytes)
            .map_err(|e| CliError::import(format!("Import failed: {}", e.reason())))?;

        if let Some(output) = &self.output {
            ModelFileService::save_model(&merged, output)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&merged)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        let custom_count: usize = merged.custom_category_items.values().map(Vec::len).sum();
        println!(
            "✓ Imported {}: {} selected, {} custom items",
            self.domain.label(),
            merged.selection.len(),
            custom_count
        );
        if merged.scope.apply_to_all {
            println!("  Scope: all projects");
        } else {
            println!("  Scope: {}", merged.scope.specific_targets.join(", "));
        }
        if let Some(output) = &self.output {
            println!("  Model written to: {}", output.display());
        }

        Ok(())
    }
}
