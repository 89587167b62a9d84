//! Reqbook - requirement configuration workbooks
//!
//! Generates blank workbook templates from the built-in catalogs, exports
//! saved models to workbooks, and imports edited workbooks back into models.

use clap::{Parser, Subcommand};
use reqbook::branding::APP_BINARY_NAME;
use reqbook::cli::{CatalogArgs, CliResult, ConfigArgs, ExportArgs, ImportArgs, TemplateArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reqbook - requirement configuration workbooks
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the default catalog of a domain
    Catalog(CatalogArgs),
    /// Write a blank workbook template
    Template(TemplateArgs),
    /// Export a model file to a workbook
    Export(ExportArgs),
    /// Import a workbook into a model
    Import(ImportArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Catalog(args) => args.execute(),
            Self::Template(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Import(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for --json output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.code.code());
    }
}
