//! Configuration management CLI commands.

use crate::branding::APP_DISPLAY_NAME;
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory holding saved model files
    #[arg(long, value_name = "DIR")]
    workspace: Option<PathBuf>,

    /// Default directory for exported workbooks
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Default project name written into workbooks
    #[arg(long, value_name = "NAME")]
    project: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    workspace: Option<String>,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    output_dir: String,
    project_name: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.workspace.is_none() && self.output_dir.is_none() && self.project.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --workspace, --output-dir, or --project",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.workspace {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create workspace directory {}: {e}",
                    path.display()
                ))
            })?;
            config.paths.workspace = Some(path.clone());
        }

        if let Some(path) = &self.output_dir {
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;
            config.export.output_dir.clone_from(path);
        }

        if let Some(project) = &self.project {
            if project.trim().is_empty() {
                return Err(CliError::validation("Project name cannot be empty"));
            }
            config.export.project_name = project.trim().to_string();
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            workspace: config
                .paths
                .workspace
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        export: ExportOutput {
            output_dir: config.export.output_dir.to_string_lossy().to_string(),
            project_name: config.export.project_name.clone(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_DISPLAY_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Paths:");
    if let Some(workspace) = &config.paths.workspace {
        println!("  Workspace: {}", workspace.display());
    } else {
        println!("  Workspace: (default)");
    }
    println!();

    println!("Export:");
    println!("  Output Directory: {}", config.export.output_dir.display());
    println!("  Project Name: {}", config.export.project_name);
    println!();
}
